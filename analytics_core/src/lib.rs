pub mod analyzer;
pub mod common;
pub mod config;
pub mod frame;
pub mod math;
pub mod signal;

pub use analyzer::analyzer::Analyzer;
pub use analyzer::result::{AnalysisResult, Band, IndicatorSet};
pub use common::error::{AnalysisError, ErrCode};
pub use common::time::TradeDate;
pub use config::analysis_config::{AnalysisConfig, DateRange};
pub use frame::price_bar::PriceBar;
pub use frame::price_series::PriceSeries;
pub use frame::raw_frame::{RawColumn, RawFrame};
pub use math::rolling::MinPeriods;
pub use signal::signal::{MaSignal, RsiSignal};
