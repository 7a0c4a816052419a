use tracing::debug;

use crate::common::error::{AnalysisError, ErrCode};
use crate::common::time::TradeDate;

use super::price_bar::PriceBar;
use super::price_series::PriceSeries;

const REQUIRED_FIELDS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// One column of a raw quote table.
///
/// Multi-symbol-capable providers label columns with several parts even when
/// a single symbol was requested, e.g. `("Close", "AAPL")`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    pub label: Vec<String>,
    pub cells: Vec<Option<f64>>,
}

impl RawColumn {
    pub fn new(label: &[&str], cells: Vec<Option<f64>>) -> Self {
        Self {
            label: label.iter().map(|s| s.to_string()).collect(),
            cells,
        }
    }

    /// First non-empty label part, whitespace trimmed.
    pub fn flat_label(&self) -> &str {
        self.label
            .iter()
            .map(|part| part.trim())
            .find(|part| !part.is_empty())
            .unwrap_or("")
    }
}

/// Raw tabular quote data as delivered by a provider, before cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFrame {
    dates: Vec<TradeDate>,
    columns: Vec<RawColumn>,
}

impl RawFrame {
    pub fn new(dates: Vec<TradeDate>, columns: Vec<RawColumn>) -> Self {
        Self { dates, columns }
    }

    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    fn field(&self, name: &str) -> Option<&RawColumn> {
        self.columns
            .iter()
            .find(|c| c.flat_label().eq_ignore_ascii_case(name))
    }

    /// Cleans the frame into a canonical series.
    ///
    /// A row survives only when every required field (open/high/low/close/
    /// volume) is present, finite and non-negative. Surviving rows are sorted
    /// ascending by date; duplicate dates are rejected. Zero surviving rows
    /// is an `EMPTY_INPUT` failure. The frame itself is left untouched.
    pub fn normalize(&self) -> Result<PriceSeries, AnalysisError> {
        let fields: Vec<Option<&RawColumn>> =
            REQUIRED_FIELDS.iter().map(|name| self.field(name)).collect();

        let mut bars = Vec::with_capacity(self.dates.len());
        let mut dropped = 0usize;
        for (row, &date) in self.dates.iter().enumerate() {
            let values: Option<Vec<f64>> = fields
                .iter()
                .map(|col| col.and_then(|c| c.cells.get(row).copied().flatten()))
                .collect();
            let bar = values.map(|v| PriceBar::new(date, v[0], v[1], v[2], v[3], v[4]));
            match bar {
                Some(bar) if bar.is_valid() => bars.push(bar),
                _ => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!(dropped, total = self.dates.len(), "dropped incomplete rows");
        }

        if bars.is_empty() {
            return Err(AnalysisError::new(
                "no usable rows after cleaning",
                ErrCode::EmptyInput,
            ));
        }

        bars.sort_by_key(|b| b.date);
        PriceSeries::from_bars(bars)
    }
}
