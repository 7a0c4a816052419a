mod cache;
mod catalog;
mod source;

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use analytics_core::{AnalysisConfig, AnalysisResult, Analyzer, DateRange, TradeDate};
use chrono::Days;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cache::CachedSource;
use catalog::InstrumentCatalog;
use source::{CsvSource, QuoteSource};

/// Longest analyzable window; wider requests are clamped to the trailing
/// ten years.
const MAX_RANGE_DAYS: u64 = 3650;
/// Raw fetch results stay fresh for an hour.
const FETCH_TTL: Duration = Duration::from_secs(3600);

#[derive(Parser, Debug)]
#[command(name = "analytics", about = "Indicators and signals for a quote history")]
struct Args {
    /// Instrument symbol, e.g. AAPL or BTC-USD
    symbol: String,

    /// Directory holding <SYMBOL>.csv quote files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// Show only the most recent N bars in presentation output
    #[arg(long)]
    row_cap: Option<usize>,

    /// JSON file overriding analysis parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full result as JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// List known symbols by asset class and exit
    #[arg(long)]
    list_symbols: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let catalog = InstrumentCatalog::default_set();

    if args.list_symbols {
        for class in catalog.classes() {
            println!("{}:", class);
            for symbol in catalog.symbols(class).unwrap_or(&[]) {
                println!("  {}", symbol);
            }
        }
        return Ok(());
    }

    if !catalog.contains(&args.symbol) {
        warn!(symbol = %args.symbol, "symbol not in the built-in catalog, proceeding anyway");
    }

    let range = parse_range(args.start.as_deref(), args.end.as_deref())?.map(clamp_range);

    let mut config: AnalysisConfig = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => AnalysisConfig::default(),
    };
    if args.row_cap.is_some() {
        config.row_cap = args.row_cap;
    }
    if range.is_some() {
        config.date_range = range;
    }

    let source = CachedSource::new(CsvSource::new(&args.data_dir), FETCH_TTL);
    let raw = source.fetch(&args.symbol, config.date_range.as_ref())?;

    let analyzer = Analyzer::new(config)?;
    let result = analyzer.analyze(&raw)?;

    print_summary(&args.symbol, &result);

    if let Some(path) = &args.out {
        fs::write(path, serde_json::to_string_pretty(&result)?)?;
        println!("Saved result to {}", path.display());
    }

    Ok(())
}

/// Both bounds or neither; start must precede end.
fn parse_range(start: Option<&str>, end: Option<&str>) -> Result<Option<DateRange>, Box<dyn Error>> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => {
            let range = DateRange::new(TradeDate::parse(start)?, TradeDate::parse(end)?)?;
            Ok(Some(range))
        }
        _ => Err("--start and --end must be given together".into()),
    }
}

/// Requests wider than ten years are pulled in to the trailing ten years.
fn clamp_range(range: DateRange) -> DateRange {
    let span = range.end.inner().signed_duration_since(range.start.inner());
    if span.num_days() as u64 <= MAX_RANGE_DAYS {
        return range;
    }
    let start = TradeDate::from(range.end.inner() - Days::new(MAX_RANGE_DAYS));
    warn!(%start, "date range limited to 10 years, start date adjusted");
    DateRange {
        start,
        end: range.end,
    }
}

fn print_summary(symbol: &str, result: &AnalysisResult) {
    println!("{}: {} bars analyzed", symbol, result.series.len());
    if let Some(bar) = result.series.last() {
        println!("Last close {:.2} on {}", bar.close, bar.date);
    }
    println!("MA signal: {}", result.ma_signal);
    println!("RSI signal: {}", result.rsi_signal);
    match result.volatility {
        Some(vol) => println!("Annualized volatility: {:.2}%", vol * 100.0),
        None => println!("Annualized volatility: not enough history"),
    }
}
