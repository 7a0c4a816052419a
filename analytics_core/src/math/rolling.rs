use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::common::error::{AnalysisError, ErrCode};

/// Warm-up policy for trailing means.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MinPeriods {
    /// Undefined until `window` values are available.
    #[default]
    #[strum(serialize = "strict")]
    Strict,
    /// Mean of however many values are available (1..window).
    #[strum(serialize = "relaxed")]
    Relaxed,
}

/// Trailing arithmetic mean over `window` values ending at each position
/// inclusive. No look-ahead.
pub fn rolling_mean(
    data: &[f64],
    window: usize,
    min_periods: MinPeriods,
) -> Result<Vec<Option<f64>>, AnalysisError> {
    check_window(window)?;

    let mut out = vec![None; data.len()];
    let mut sum = 0.0;
    for (i, &value) in data.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= data[i - window];
        }
        let available = (i + 1).min(window);
        if available == window {
            out[i] = Some(sum / window as f64);
        } else if min_periods == MinPeriods::Relaxed {
            out[i] = Some(sum / available as f64);
        }
    }
    Ok(out)
}

/// Trailing minimum over `window` values; undefined until the window fills.
pub fn rolling_min(data: &[f64], window: usize) -> Result<Vec<Option<f64>>, AnalysisError> {
    check_window(window)?;

    let mut out = vec![None; data.len()];
    for i in (window - 1)..data.len() {
        let start = i + 1 - window;
        out[i] = Some(data[start..=i].iter().copied().fold(f64::INFINITY, f64::min));
    }
    Ok(out)
}

/// Trailing maximum over `window` values; undefined until the window fills.
pub fn rolling_max(data: &[f64], window: usize) -> Result<Vec<Option<f64>>, AnalysisError> {
    check_window(window)?;

    let mut out = vec![None; data.len()];
    for i in (window - 1)..data.len() {
        let start = i + 1 - window;
        out[i] = Some(
            data[start..=i]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
        );
    }
    Ok(out)
}

fn check_window(window: usize) -> Result<(), AnalysisError> {
    if window == 0 {
        return Err(AnalysisError::new(
            "window must be at least 1",
            ErrCode::ParaError,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean_strict_warmup() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_mean(&data, 3, MinPeriods::Strict).unwrap();

        assert_eq!(result.len(), data.len());
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        assert!((result[2].unwrap() - 2.0).abs() < 1e-9);
        assert!((result[3].unwrap() - 3.0).abs() < 1e-9);
        assert!((result[4].unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_rolling_mean_relaxed_warmup() {
        let data = vec![1.0, 2.0, 3.0];
        let result = rolling_mean(&data, 3, MinPeriods::Relaxed).unwrap();

        assert!((result[0].unwrap() - 1.0).abs() < 1e-9);
        assert!((result[1].unwrap() - 1.5).abs() < 1e-9);
        assert!((result[2].unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rolling_mean_window_longer_than_data() {
        let result = rolling_mean(&[1.0, 2.0], 5, MinPeriods::Strict).unwrap();
        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn test_rolling_min_max() {
        let data = vec![5.0, 3.0, 8.0, 2.0, 7.0];
        let min = rolling_min(&data, 3).unwrap();
        let max = rolling_max(&data, 3).unwrap();

        assert_eq!(min[0], None);
        assert_eq!(min[1], None);
        assert_eq!(min[2], Some(3.0));
        assert_eq!(min[3], Some(2.0));
        assert_eq!(min[4], Some(2.0));

        assert_eq!(max[2], Some(8.0));
        assert_eq!(max[3], Some(8.0));
        assert_eq!(max[4], Some(8.0));
    }

    #[test]
    fn test_zero_window_is_error() {
        assert_eq!(
            rolling_mean(&[1.0], 0, MinPeriods::Strict).unwrap_err().code,
            ErrCode::ParaError
        );
        assert!(rolling_min(&[1.0], 0).is_err());
        assert!(rolling_max(&[1.0], 0).is_err());
    }
}
