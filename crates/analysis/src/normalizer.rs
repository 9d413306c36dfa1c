//! Raw candle normalization.
//!
//! Coerces a raw JSON candle record, or a singleton list of one, into a
//! typed [`Candle`]. A stored day holds exactly one candle under v0;
//! anything else is a validation error, never a truncation.

use eod_core::{Candle, Error, Result};
use serde_json::{Map, Value};

/// Normalize a raw candle record into a typed [`Candle`].
///
/// Accepts either a single candle mapping or a sequence containing exactly
/// one candle mapping. Field coercion happens here so the classifier only
/// ever sees typed input.
pub fn normalize(raw: &Value) -> Result<Candle> {
    let record = match raw {
        Value::Array(items) => {
            if items.len() != 1 {
                return Err(Error::validation(format!(
                    "expected exactly one candle for this date, got {}",
                    items.len()
                )));
            }
            &items[0]
        }
        other => other,
    };

    let map = record
        .as_object()
        .ok_or_else(|| Error::validation("candle must be a key-value record"))?;

    Ok(Candle {
        trade_date: field_str(map, "trade_date")?,
        open: field_f64(map, "open")?,
        high: field_f64(map, "high")?,
        low: field_f64(map, "low")?,
        close: field_f64(map, "close")?,
        volume: field_f64(map, "volume")?,
    })
}

fn field_str(map: &Map<String, Value>, name: &str) -> Result<String> {
    map.get(name)
        .ok_or_else(|| Error::validation(format!("missing field `{name}`")))?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::validation(format!("field `{name}` must be a string")))
}

fn field_f64(map: &Map<String, Value>, name: &str) -> Result<f64> {
    map.get(name)
        .ok_or_else(|| Error::validation(format!("missing field `{name}`")))?
        .as_f64()
        .ok_or_else(|| Error::validation(format!("field `{name}` must be numeric")))
}
