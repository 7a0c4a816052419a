use serde::{Deserialize, Serialize};

use crate::common::time::TradeDate;

/// One trading-period OHLCV record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: TradeDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(date: TradeDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// All fields finite and non-negative. Volume may be zero.
    pub fn is_valid(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(open: f64, high: f64, low: f64, close: f64, volume: f64) -> PriceBar {
        PriceBar::new(TradeDate::new(2024, 1, 2).unwrap(), open, high, low, close, volume)
    }

    #[test]
    fn test_valid_bar() {
        assert!(bar(10.0, 11.0, 9.5, 10.5, 1000.0).is_valid());
        assert!(bar(10.0, 11.0, 9.5, 10.5, 0.0).is_valid());
    }

    #[test]
    fn test_invalid_bar() {
        assert!(!bar(f64::NAN, 11.0, 9.5, 10.5, 1000.0).is_valid());
        assert!(!bar(10.0, f64::INFINITY, 9.5, 10.5, 1000.0).is_valid());
        assert!(!bar(10.0, 11.0, -1.0, 10.5, 1000.0).is_valid());
    }
}
