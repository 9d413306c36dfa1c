//! Core data types for the EOD analyzer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema version tag embedded in every EOD_STATE v0 artifact.
///
/// The v0 shape is immutable: any field addition or removal requires a new
/// version tag, never an in-place change to v0.
pub const EOD_STATE_VERSION: &str = "EOD_STATE_v0";

/// One trading day's OHLCV record.
///
/// The `low <= open,close <= high` invariant is not enforced here; upstream
/// data quality owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Calendar date, ISO `YYYY-MM-DD`.
    pub trade_date: String,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume (present by contract, unused by v0 classification).
    pub volume: f64,
}

impl Candle {
    /// Full high-low range of the session.
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Absolute size of the candle body.
    #[inline]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Distance from the body top to the session high.
    #[inline]
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// Distance from the body bottom to the session low.
    #[inline]
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }
}

/// Directional classification of a candle based on close vs. open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    /// Closed above the open.
    Up,
    /// Closed below the open.
    Down,
    /// Closed exactly at the open.
    Side,
}

impl Trend {
    /// Get the wire label for this trend.
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
            Trend::Side => "SIDE",
        }
    }
}

/// Where the close sits within the day's high-low range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClosePosition {
    /// Close in the upper band of the range.
    NearHigh,
    /// Close in the lower band of the range.
    NearLow,
    /// Close in the middle band, or a zero-range day.
    Mid,
}

impl ClosePosition {
    /// Get the wire label for this close position.
    pub fn as_str(self) -> &'static str {
        match self {
            ClosePosition::NearHigh => "NEAR_HIGH",
            ClosePosition::NearLow => "NEAR_LOW",
            ClosePosition::Mid => "MID",
        }
    }
}

/// Artifact metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMeta {
    /// Always [`EOD_STATE_VERSION`] for v0.
    pub version: String,
    /// Echo of the input date.
    pub trade_date: String,
    /// Synthetic timestamp `{trade_date}T00:00:00Z`, derived solely from
    /// the input date, never from a wall clock.
    pub analysis_time: String,
}

/// Echoed numeric bounds of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub high: f64,
    pub low: f64,
}

/// Price-structure classification block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStructure {
    /// Session bounds.
    pub range: PriceRange,
    /// Directional classification.
    pub trend: Trend,
    /// Close placement within the range.
    pub close_position: ClosePosition,
}

/// The versioned EOD analysis artifact for one date.
///
/// Created fresh per date, never mutated after creation, persisted once.
/// The reserved fields are always `null` in v0 so downstream consumers can
/// schema-match future versions without key errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EodState {
    /// Version tag and date metadata.
    pub meta: StateMeta,
    /// Trend and close-position classifications.
    pub price_structure: PriceStructure,
    /// Reserved for v1+.
    pub volatility: Option<Value>,
    /// Reserved for v1+.
    pub volume: Option<Value>,
    /// Reserved for v1+.
    pub market_behavior: Option<Value>,
}
