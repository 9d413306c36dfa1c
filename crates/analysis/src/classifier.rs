//! EOD state classification.
//!
//! Computes the versioned EOD_STATE v0 record for a normalized candle:
//! trend from close vs. open, close position from where the close sits in
//! the high-low range.

use eod_core::{
    Candle, ClassifierConfig, ClosePosition, EodState, Error, PriceRange, PriceStructure, Result,
    StateMeta, Trend, EOD_STATE_VERSION,
};
use tracing::warn;

/// State classifier producing EOD_STATE v0 records.
///
/// Pure and deterministic: the same candle always yields the same record,
/// and the synthetic analysis time is derived from the trade date, never
/// from a wall clock.
pub struct EodClassifier {
    /// Close-position thresholds.
    config: ClassifierConfig,
}

impl EodClassifier {
    /// Create a classifier with the given thresholds.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a single candle into an EOD_STATE v0 record.
    pub fn classify(&self, candle: &Candle) -> Result<EodState> {
        for (name, value) in [
            ("open", candle.open),
            ("high", candle.high),
            ("low", candle.low),
            ("close", candle.close),
        ] {
            if !value.is_finite() {
                return Err(Error::validation(format!(
                    "field `{name}` must be a finite number"
                )));
            }
        }

        if candle.low > candle.open.min(candle.close)
            || candle.high < candle.open.max(candle.close)
        {
            warn!(
                trade_date = %candle.trade_date,
                "candle bounds do not contain open/close"
            );
        }

        let trend = if candle.close > candle.open {
            Trend::Up
        } else if candle.close < candle.open {
            Trend::Down
        } else {
            Trend::Side
        };

        Ok(EodState {
            meta: StateMeta {
                version: EOD_STATE_VERSION.to_string(),
                trade_date: candle.trade_date.clone(),
                analysis_time: format!("{}T00:00:00Z", candle.trade_date),
            },
            price_structure: PriceStructure {
                range: PriceRange {
                    high: candle.high,
                    low: candle.low,
                },
                trend,
                close_position: self.close_position(candle),
            },
            volatility: None,
            volume: None,
            market_behavior: None,
        })
    }

    /// Classify where the close sits within the high-low range.
    ///
    /// A zero-range day is MID unconditionally; the ratio is not clamped
    /// for malformed candles whose close lies outside `[low, high]`.
    fn close_position(&self, candle: &Candle) -> ClosePosition {
        if candle.high == candle.low {
            return ClosePosition::Mid;
        }

        let ratio = (candle.close - candle.low) / (candle.high - candle.low);
        if ratio >= self.config.near_high_ratio {
            ClosePosition::NearHigh
        } else if ratio <= self.config.near_low_ratio {
            ClosePosition::NearLow
        } else {
            ClosePosition::Mid
        }
    }
}

impl Default for EodClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
