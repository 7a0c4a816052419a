use serde::{Deserialize, Serialize};

use crate::common::error::{AnalysisError, ErrCode};
use crate::common::time::TradeDate;
use crate::math::rolling::MinPeriods;

/// Inclusive date window for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: TradeDate,
    pub end: TradeDate,
}

impl DateRange {
    pub fn new(start: TradeDate, end: TradeDate) -> Result<Self, AnalysisError> {
        let range = Self { start, end };
        range.check()?;
        Ok(range)
    }

    /// Deserialized ranges bypass `new`, so validation re-runs this.
    pub fn check(&self) -> Result<(), AnalysisError> {
        if self.start >= self.end {
            return Err(AnalysisError::new(
                format!("start date {} must precede end date {}", self.start, self.end),
                ErrCode::InvalidRange,
            ));
        }
        Ok(())
    }

    pub fn contains(&self, date: TradeDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parameters for one analysis run, supplied by the host per invocation.
/// Never process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Short moving-average window.
    pub ma_short: usize,
    /// Long moving-average window.
    pub ma_long: usize,
    /// RSI smoothing window.
    pub rsi_window: usize,
    /// Support/resistance band windows; empty disables bands.
    pub band_windows: Vec<usize>,
    /// Moving-average warm-up policy.
    pub min_periods: MinPeriods,
    /// Truncate the display series to the most recent N bars. Affects only
    /// what is shown, never a computed statistic.
    pub row_cap: Option<usize>,
    /// Restrict the analysis to this inclusive date window.
    pub date_range: Option<DateRange>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ma_short: 50,
            ma_long: 200,
            rsi_window: 14,
            band_windows: vec![20, 50, 100],
            min_periods: MinPeriods::default(),
            row_cap: None,
            date_range: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (name, window) in [
            ("ma_short", self.ma_short),
            ("ma_long", self.ma_long),
            ("rsi_window", self.rsi_window),
        ] {
            if window == 0 {
                return Err(AnalysisError::new(
                    format!("{} must be at least 1", name),
                    ErrCode::ParaError,
                ));
            }
        }
        if self.ma_short >= self.ma_long {
            return Err(AnalysisError::new(
                format!(
                    "ma_short ({}) must be less than ma_long ({})",
                    self.ma_short, self.ma_long
                ),
                ErrCode::ParaError,
            ));
        }
        if self.band_windows.iter().any(|&w| w == 0) {
            return Err(AnalysisError::new(
                "band windows must be at least 1",
                ErrCode::ParaError,
            ));
        }
        if self.row_cap == Some(0) {
            return Err(AnalysisError::new(
                "row_cap must be at least 1 when set",
                ErrCode::ParaError,
            ));
        }
        if let Some(range) = &self.date_range {
            range.check()?;
        }
        Ok(())
    }
}
