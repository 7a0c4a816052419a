use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::time::TradeDate;
use crate::frame::price_series::PriceSeries;
use crate::signal::signal::{MaSignal, RsiSignal};

/// Paired rolling support/resistance columns for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Rolling minimum of `low`.
    pub support: Vec<Option<f64>>,
    /// Rolling maximum of `high`.
    pub resistance: Vec<Option<f64>>,
}

/// Derived columns, aligned one-to-one with the source series by position.
///
/// Every column has the source series' length; positions before a window is
/// filled hold `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub dates: Vec<TradeDate>,
    /// Moving averages keyed by window length.
    pub moving_averages: BTreeMap<usize, Vec<Option<f64>>>,
    pub daily_returns: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    /// Support/resistance bands keyed by window length.
    pub bands: BTreeMap<usize, Band>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn last_ma(&self, window: usize) -> Option<f64> {
        self.moving_averages
            .get(&window)
            .and_then(|column| column.last().copied())
            .flatten()
    }

    pub fn last_rsi(&self) -> Option<f64> {
        self.rsi.last().copied().flatten()
    }

    /// Date/value pairs for one column, ready to plot as-is.
    pub fn points<'a>(
        &'a self,
        column: &'a [Option<f64>],
    ) -> impl Iterator<Item = (TradeDate, Option<f64>)> + 'a {
        self.dates.iter().copied().zip(column.iter().copied())
    }
}

/// Consolidated output of one analysis run.
///
/// Owned by the caller; immutable once produced, no back-reference to the
/// inputs it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Cleaned, date-filtered series all statistics were computed on.
    pub series: PriceSeries,
    /// Row-capped tail of `series` for presentation (candlesticks, tables).
    pub display: PriceSeries,
    pub indicators: IndicatorSet,
    pub ma_signal: MaSignal,
    pub rsi_signal: RsiSignal,
    /// Annualized volatility; `None` with fewer than 2 defined returns.
    pub volatility: Option<f64>,
}
