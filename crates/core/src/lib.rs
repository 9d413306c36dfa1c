//! Core types and configuration for the EOD analyzer.
//!
//! This crate provides shared types used across all other crates:
//! - Market data types (daily candles, trend and close-position labels)
//! - The versioned EOD_STATE artifact
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{ClassifierConfig, Config, StoreConfig};
pub use error::{Error, Result};
pub use types::*;
