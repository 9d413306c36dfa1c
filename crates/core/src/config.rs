//! Configuration structures for the EOD analyzer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// State classifier configuration.
    pub classifier: ClassifierConfig,
    /// Storage layout configuration.
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

/// Close-position thresholds for the state classifier.
///
/// The defaults are fixed constants of the v0 schema. The gap between
/// `near_low_ratio` and `near_high_ratio` is the MID band; both boundaries
/// are inclusive of their NEAR bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum close ratio classified as NEAR_HIGH.
    pub near_high_ratio: f64,
    /// Maximum close ratio classified as NEAR_LOW.
    pub near_low_ratio: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            near_high_ratio: 0.66,
            near_low_ratio: 0.34,
        }
    }
}

/// Date-partitioned storage layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root folder containing `YYYY/MM/DD/{input_filename}`.
    pub input_root: PathBuf,
    /// Root folder for `YYYY/MM/DD/{output_filename}`.
    pub output_root: PathBuf,
    /// Per-date input filename.
    pub input_filename: String,
    /// Per-date output filename.
    pub output_filename: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("input"),
            output_root: PathBuf::from("history"),
            input_filename: "eod_candles.json".to_string(),
            output_filename: "eod_state.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.classifier.near_high_ratio, 0.66);
        assert_eq!(config.classifier.near_low_ratio, 0.34);
        assert_eq!(config.store.input_root, PathBuf::from("input"));
        assert_eq!(config.store.output_root, PathBuf::from("history"));
        assert_eq!(config.store.input_filename, "eod_candles.json");
        assert_eq!(config.store.output_filename, "eod_state.json");
    }
}
