//! Date-partitioned JSON storage for the EOD analyzer.
//!
//! This crate handles:
//! - Path construction under `{root}/YYYY/MM/DD/{filename}`
//! - Loading and validating per-date candle files
//! - Persisting EOD_STATE artifacts without partial writes

use chrono::{Datelike, NaiveDate};
use eod_core::{Candle, EodState, Error, Result, StoreConfig};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys every stored candle record must carry.
const REQUIRED_KEYS: [&str; 6] = ["trade_date", "open", "high", "low", "close", "volume"];

/// Filesystem store keyed by calendar date.
pub struct EodStore {
    /// Storage layout.
    config: StoreConfig,
}

impl EodStore {
    /// Create a store from a storage configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create a store with custom roots and default filenames.
    pub fn with_roots(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig {
            input_root: input_root.into(),
            output_root: output_root.into(),
            ..StoreConfig::default()
        })
    }

    /// Input file path for a date.
    pub fn input_path(&self, date: NaiveDate) -> PathBuf {
        date_dir(&self.config.input_root, date).join(&self.config.input_filename)
    }

    /// Output file path for a date.
    pub fn output_path(&self, date: NaiveDate) -> PathBuf {
        date_dir(&self.config.output_root, date).join(&self.config.output_filename)
    }

    /// Load the candle stored for a date.
    ///
    /// The stored file must hold a JSON array of candle records; every
    /// record must carry the required keys and match the requested date.
    /// Exactly one record per date is valid under v0.
    pub fn load_candle(&self, date: NaiveDate) -> Result<Candle> {
        let path = self.input_path(date);
        let bytes = fs::read(&path)?;
        let raw: Value = serde_json::from_slice(&bytes)?;

        let items = raw
            .as_array()
            .ok_or_else(|| Error::validation("EOD candles file must hold an array"))?;
        let date_str = date.format("%Y-%m-%d").to_string();
        for item in items {
            validate_record(item, &date_str)?;
        }

        eod_analysis::normalize(&raw)
    }

    /// Persist an EOD_STATE artifact for a date, creating intermediate
    /// directories as needed. Returns the written path.
    ///
    /// The artifact is staged in a temporary sibling and renamed into
    /// place, so a failing date never leaves a partial output file.
    pub fn persist_state(&self, date: NaiveDate, state: &EodState) -> Result<PathBuf> {
        let path = self.output_path(date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(state)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), "wrote EOD state");
        Ok(path)
    }
}

/// Check one stored record: mapping shape, required keys, date match.
fn validate_record(item: &Value, date_str: &str) -> Result<()> {
    let map = item
        .as_object()
        .ok_or_else(|| Error::validation("each candle must be a key-value record"))?;

    let mut missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .filter(|key| !map.contains_key(**key))
        .copied()
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(Error::validation(format!(
            "missing keys: {}",
            missing.join(", ")
        )));
    }

    let record_date = map.get("trade_date").and_then(Value::as_str);
    if record_date != Some(date_str) {
        return Err(Error::validation(format!(
            "trade_date mismatch: expected {date_str}"
        )));
    }

    Ok(())
}

fn date_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}", date.day()))
}
