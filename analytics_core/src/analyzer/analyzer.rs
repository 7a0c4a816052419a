use std::collections::BTreeMap;

use tracing::debug;

use crate::common::error::{AnalysisError, ErrCode};
use crate::config::analysis_config::AnalysisConfig;
use crate::frame::price_series::PriceSeries;
use crate::frame::raw_frame::RawFrame;
use crate::math::returns::{annualized_volatility, pct_change};
use crate::math::rolling::{rolling_max, rolling_mean, rolling_min};
use crate::math::rsi::rsi_series;
use crate::signal::signal::{MaSignal, RsiSignal};

use super::result::{AnalysisResult, Band, IndicatorSet};

/// Runs the full pipeline: normalize, filter, indicators, signals.
///
/// Holds only the configuration; `analyze` takes `&self` and mutates
/// nothing, so one analyzer may serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, raw: &RawFrame) -> Result<AnalysisResult, AnalysisError> {
        let series = raw.normalize()?;
        let series = match &self.config.date_range {
            Some(range) => series.between(range.start, range.end),
            None => series,
        };
        if series.is_empty() {
            return Err(AnalysisError::new(
                "no bars inside the requested date range",
                ErrCode::EmptyInput,
            ));
        }

        let indicators = self.compute_indicators(&series)?;
        let volatility = annualized_volatility(&indicators.daily_returns);

        let ma_signal = MaSignal::evaluate(
            indicators.last_ma(self.config.ma_short),
            indicators.last_ma(self.config.ma_long),
        );
        let rsi_signal = RsiSignal::evaluate(indicators.last_rsi());

        // Display truncation happens after every statistic is in hand.
        let display = match self.config.row_cap {
            Some(cap) => series.tail(cap),
            None => series.clone(),
        };

        debug!(
            bars = series.len(),
            %ma_signal,
            %rsi_signal,
            "analysis complete"
        );

        Ok(AnalysisResult {
            series,
            display,
            indicators,
            ma_signal,
            rsi_signal,
            volatility,
        })
    }

    fn compute_indicators(&self, series: &PriceSeries) -> Result<IndicatorSet, AnalysisError> {
        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();

        let mut moving_averages = BTreeMap::new();
        for window in [self.config.ma_short, self.config.ma_long] {
            moving_averages.insert(
                window,
                rolling_mean(&closes, window, self.config.min_periods)?,
            );
        }

        let mut bands = BTreeMap::new();
        for &window in &self.config.band_windows {
            bands.insert(
                window,
                Band {
                    support: rolling_min(&lows, window)?,
                    resistance: rolling_max(&highs, window)?,
                },
            );
        }

        Ok(IndicatorSet {
            dates: series.dates(),
            moving_averages,
            daily_returns: pct_change(&closes),
            rsi: rsi_series(&closes, self.config.rsi_window)?,
            bands,
        })
    }
}
