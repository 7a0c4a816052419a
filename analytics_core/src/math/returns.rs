/// Assumed trading days per year for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Fractional change from the prior value: `data[i] / data[i-1] - 1`.
///
/// Undefined at position 0, and wherever the prior value is zero (a zero
/// price has no meaningful relative change).
pub fn pct_change(data: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; data.len()];
    for i in 1..data.len() {
        let prev = data[i - 1];
        if prev > 0.0 {
            out[i] = Some(data[i] / prev - 1.0);
        }
    }
    out
}

/// Annualized volatility: sample standard deviation (ddof = 1) of the
/// defined returns, scaled by the square root of the trading year.
///
/// `None` when fewer than 2 defined returns exist. Pure function; calling it
/// twice on the same input yields the identical scalar.
pub fn annualized_volatility(returns: &[Option<f64>]) -> Option<f64> {
    let defined: Vec<f64> = returns.iter().flatten().copied().collect();
    if defined.len() < 2 {
        return None;
    }

    let n = defined.len() as f64;
    let mean = defined.iter().sum::<f64>() / n;
    let variance = defined.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Some(variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_change_values() {
        let result = pct_change(&[100.0, 110.0, 99.0]);

        assert_eq!(result[0], None);
        assert!((result[1].unwrap() - 0.1).abs() < 1e-9);
        assert!((result[2].unwrap() - (-0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_pct_change_zero_prior() {
        let result = pct_change(&[0.0, 5.0]);
        assert_eq!(result[1], None);
    }

    #[test]
    fn test_volatility_needs_two_returns() {
        assert_eq!(annualized_volatility(&[]), None);
        assert_eq!(annualized_volatility(&[None, Some(0.1)]), None);
    }

    #[test]
    fn test_volatility_value() {
        // Sample std dev of [0.01, -0.01] is sqrt(2e-4) ~ 0.0141421.
        let returns = vec![None, Some(0.01), Some(-0.01)];
        let vol = annualized_volatility(&returns).unwrap();
        let expected = (2e-4_f64).sqrt() * 252.0_f64.sqrt();
        assert!((vol - expected).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_idempotent() {
        let returns = vec![Some(0.02), Some(-0.005), Some(0.013), Some(0.0)];
        let first = annualized_volatility(&returns).unwrap();
        let second = annualized_volatility(&returns).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
