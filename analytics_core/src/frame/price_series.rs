use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::common::error::{AnalysisError, ErrCode};
use crate::common::time::TradeDate;

use super::price_bar::PriceBar;

/// Cleaned bar series, ascending by date with unique dates.
///
/// Calendar gaps (weekends, holidays) are expected and carry no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Builds a series from bars already sorted ascending by date.
    /// Rejects out-of-order or duplicate dates.
    pub fn from_bars(bars: Vec<PriceBar>) -> Result<Self, AnalysisError> {
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AnalysisError::new(
                    format!(
                        "bar dates must be strictly increasing: {} then {}",
                        pair[0].date, pair[1].date
                    ),
                    ErrCode::DataInvalid,
                ));
            }
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceBar> {
        self.bars.iter()
    }

    pub fn dates(&self) -> Vec<TradeDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Bars with `start <= date <= end`. May be empty.
    pub fn between(&self, start: TradeDate, end: TradeDate) -> Self {
        Self {
            bars: self
                .bars
                .iter()
                .filter(|b| b.date >= start && b.date <= end)
                .copied()
                .collect(),
        }
    }

    /// The most recent `n` bars (the whole series when `n >= len`).
    /// Presentation helper; statistics are always computed on the full series.
    pub fn tail(&self, n: usize) -> Self {
        let skip = self.bars.len().saturating_sub(n);
        Self {
            bars: self.bars[skip..].to_vec(),
        }
    }
}

impl Index<usize> for PriceSeries {
    type Output = PriceBar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bars[index]
    }
}
