use std::collections::VecDeque;

use crate::common::error::{AnalysisError, ErrCode};

/// Incremental Relative Strength Index over a trailing window.
///
/// Gains and losses are price differences (not percentages), averaged with a
/// simple arithmetic mean over the last `period` bars, not Wilder's
/// exponential smoothing. The first defined value appears once `period`
/// price changes have accumulated, i.e. at the `period`-th bar fed in.
#[derive(Debug)]
pub struct Rsi {
    period: usize,
    last_price: Option<f64>,
    gains: VecDeque<f64>,
    losses: VecDeque<f64>,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            last_price: None,
            gains: VecDeque::with_capacity(period),
            losses: VecDeque::with_capacity(period),
        }
    }

    /// Feeds the next close; returns the RSI once the window is full.
    pub fn add(&mut self, price: f64) -> Option<f64> {
        let result = if let Some(last_price) = self.last_price {
            let change = price - last_price;

            if change >= 0.0 {
                self.gains.push_back(change);
                self.losses.push_back(0.0);
            } else {
                self.gains.push_back(0.0);
                self.losses.push_back(-change);
            }

            if self.gains.len() > self.period {
                self.gains.pop_front();
                self.losses.pop_front();
            }

            if self.gains.len() == self.period {
                let avg_gain = self.gains.iter().sum::<f64>() / self.period as f64;
                let avg_loss = self.losses.iter().sum::<f64>() / self.period as f64;

                if avg_loss == 0.0 && avg_gain == 0.0 {
                    // Flat window: no movement either way.
                    Some(50.0)
                } else if avg_loss == 0.0 {
                    Some(100.0)
                } else {
                    let rs = avg_gain / avg_loss;
                    Some(100.0 - (100.0 / (1.0 + rs)))
                }
            } else {
                None
            }
        } else {
            None
        };

        self.last_price = Some(price);
        result.map(|rsi| rsi.clamp(0.0, 100.0))
    }
}

/// RSI for a whole close series; `None` for the first `period` positions.
pub fn rsi_series(closes: &[f64], period: usize) -> Result<Vec<Option<f64>>, AnalysisError> {
    if period == 0 {
        return Err(AnalysisError::new(
            "RSI period must be at least 1",
            ErrCode::ParaError,
        ));
    }

    let mut rsi = Rsi::new(period);
    Ok(closes.iter().map(|&close| rsi.add(close)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_boundary() {
        let closes: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let result = rsi_series(&closes, 14).unwrap();

        assert_eq!(result.len(), closes.len());
        for value in &result[..14] {
            assert_eq!(*value, None);
        }
        assert!(result[14].is_some());
    }

    #[test]
    fn test_all_gains_is_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let result = rsi_series(&closes, 14).unwrap();

        for value in result.iter().flatten() {
            assert!((value - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_all_losses_is_0() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let result = rsi_series(&closes, 14).unwrap();

        for value in result.iter().flatten() {
            assert!(value.abs() < 1e-9);
        }
    }

    #[test]
    fn test_flat_window_is_50() {
        let closes = vec![100.0; 30];
        let result = rsi_series(&closes, 14).unwrap();

        for value in result.iter().flatten() {
            assert!((value - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_range() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        let result = rsi_series(&closes, 14).unwrap();

        for value in result.iter().flatten() {
            assert!((0.0..=100.0).contains(value));
        }
    }

    #[test]
    fn test_zero_period_is_error() {
        assert_eq!(
            rsi_series(&[1.0, 2.0], 0).unwrap_err().code,
            ErrCode::ParaError
        );
    }
}
