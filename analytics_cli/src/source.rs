use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use analytics_core::{DateRange, RawColumn, RawFrame, TradeDate};
use csv::Reader;

/// Supplies raw quote history for one instrument and date window.
pub trait QuoteSource {
    fn fetch(&self, symbol: &str, range: Option<&DateRange>)
        -> Result<RawFrame, Box<dyn Error>>;
}

/// Reads `<data_dir>/<SYMBOL>.csv` files with a date column plus
/// open/high/low/close/volume columns.
pub struct CsvSource {
    data_dir: PathBuf,
}

impl CsvSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", symbol))
    }
}

impl QuoteSource for CsvSource {
    fn fetch(
        &self,
        symbol: &str,
        range: Option<&DateRange>,
    ) -> Result<RawFrame, Box<dyn Error>> {
        let file = File::open(self.csv_path(symbol))?;
        let mut rdr = Reader::from_reader(file);

        let headers = rdr.headers()?.clone();
        let date_idx = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("date"))
            .unwrap_or(0);

        let mut dates = Vec::new();
        let mut fields: Vec<(usize, String, Vec<Option<f64>>)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != date_idx)
            .map(|(i, name)| (i, name.to_string(), Vec::new()))
            .collect();

        for record in rdr.records() {
            let record = record?;
            let date = TradeDate::parse(record.get(date_idx).unwrap_or(""))?;
            if matches!(range, Some(r) if !r.contains(date)) {
                continue;
            }
            dates.push(date);
            for (idx, _, cells) in fields.iter_mut() {
                cells.push(record.get(*idx).and_then(parse_cell));
            }
        }

        let columns = fields
            .into_iter()
            .map(|(_, name, cells)| RawColumn::new(&[name.as_str()], cells))
            .collect();
        Ok(RawFrame::new(dates, columns))
    }
}

/// Blank and unparseable cells are missing values, not zeros.
fn parse_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        None
    } else {
        cell.parse().ok()
    }
}
