use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// RSI level above which an instrument is considered overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI level below which an instrument is considered oversold.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Moving-average cross classification from the latest short/long values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaSignal {
    #[strum(serialize = "BUY")]
    Buy,
    #[strum(serialize = "SELL")]
    Sell,
    #[strum(serialize = "UNDETERMINED")]
    Undetermined,
}

impl MaSignal {
    /// Buy when the short average sits above the long one, Sell below.
    /// Undetermined when either value is missing or the two are exactly
    /// equal (an exact tie carries no direction).
    pub fn evaluate(short_last: Option<f64>, long_last: Option<f64>) -> Self {
        match (short_last, long_last) {
            (Some(short), Some(long)) if short > long => Self::Buy,
            (Some(short), Some(long)) if short < long => Self::Sell,
            _ => Self::Undetermined,
        }
    }
}

/// RSI level classification from the latest RSI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiSignal {
    #[strum(serialize = "OVERBOUGHT")]
    Overbought,
    #[strum(serialize = "OVERSOLD")]
    Oversold,
    #[strum(serialize = "NEUTRAL")]
    Neutral,
    #[strum(serialize = "UNDETERMINED")]
    Undetermined,
}

impl RsiSignal {
    /// Boundary values 30 and 70 are Neutral.
    pub fn evaluate(rsi_last: Option<f64>) -> Self {
        match rsi_last {
            None => Self::Undetermined,
            Some(value) if value > RSI_OVERBOUGHT => Self::Overbought,
            Some(value) if value < RSI_OVERSOLD => Self::Oversold,
            Some(_) => Self::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ma_signal() {
        assert_eq!(MaSignal::evaluate(Some(105.0), Some(100.0)), MaSignal::Buy);
        assert_eq!(MaSignal::evaluate(Some(95.0), Some(100.0)), MaSignal::Sell);
        assert_eq!(
            MaSignal::evaluate(None, Some(100.0)),
            MaSignal::Undetermined
        );
        assert_eq!(MaSignal::evaluate(Some(100.0), None), MaSignal::Undetermined);
    }

    #[test]
    fn test_ma_signal_tie_is_undetermined() {
        assert_eq!(
            MaSignal::evaluate(Some(100.0), Some(100.0)),
            MaSignal::Undetermined
        );
    }

    #[test]
    fn test_rsi_signal() {
        assert_eq!(RsiSignal::evaluate(Some(75.0)), RsiSignal::Overbought);
        assert_eq!(RsiSignal::evaluate(Some(25.0)), RsiSignal::Oversold);
        assert_eq!(RsiSignal::evaluate(Some(50.0)), RsiSignal::Neutral);
        assert_eq!(RsiSignal::evaluate(None), RsiSignal::Undetermined);
    }

    #[test]
    fn test_rsi_signal_boundaries_are_neutral() {
        assert_eq!(RsiSignal::evaluate(Some(70.0)), RsiSignal::Neutral);
        assert_eq!(RsiSignal::evaluate(Some(30.0)), RsiSignal::Neutral);
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(MaSignal::Buy.to_string(), "BUY");
        assert_eq!(RsiSignal::Overbought.to_string(), "OVERBOUGHT");
    }
}
