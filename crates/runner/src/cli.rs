//! Command-line argument parsing.
//!
//! Accepts either a single `--date` or a `--start-date`/`--end-date` pair
//! (both required together, mutually exclusive with `--date`). Every
//! parsing failure maps to exit code 2 in main.

use chrono::NaiveDate;
use eod_core::config::StoreConfig;
use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed alongside argument errors.
pub const USAGE: &str = "Usage: eod-runner [--input-root PATH] [--output-root PATH] \
(--date YYYY-MM-DD | --start-date YYYY-MM-DD --end-date YYYY-MM-DD)";

/// An argument error; the process exits with code 2.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(String);

impl UsageError {
    fn new(msg: impl Into<String>) -> Self {
        UsageError(msg.into())
    }
}

/// Which dates to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One date.
    Single(NaiveDate),
    /// Inclusive date range.
    Range(NaiveDate, NaiveDate),
}

/// Parsed command line.
#[derive(Debug)]
pub struct CliArgs {
    /// Storage layout with any root overrides applied.
    pub store: StoreConfig,
    /// Dates to analyze.
    pub mode: RunMode,
}

/// Parse command-line arguments (without the program name).
pub fn parse(args: &[String]) -> Result<CliArgs, UsageError> {
    let mut input_root: Option<PathBuf> = None;
    let mut output_root: Option<PathBuf> = None;
    let mut date: Option<NaiveDate> = None;
    let mut start_date: Option<NaiveDate> = None;
    let mut end_date: Option<NaiveDate> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--date" => set_date(&mut date, "--date", iter.next())?,
            "--start-date" => set_date(&mut start_date, "--start-date", iter.next())?,
            "--end-date" => set_date(&mut end_date, "--end-date", iter.next())?,
            "--input-root" => set_path(&mut input_root, "--input-root", iter.next())?,
            "--output-root" => set_path(&mut output_root, "--output-root", iter.next())?,
            other => return Err(UsageError::new(format!("unknown argument `{other}`"))),
        }
    }

    let mode = match (date, start_date, end_date) {
        (Some(date), None, None) => RunMode::Single(date),
        (None, Some(start), Some(end)) => RunMode::Range(start, end),
        (Some(_), _, _) => {
            return Err(UsageError::new(
                "use either --date or --start-date/--end-date",
            ));
        }
        (None, Some(_), None) | (None, None, Some(_)) => {
            return Err(UsageError::new(
                "both --start-date and --end-date are required",
            ));
        }
        (None, None, None) => return Err(UsageError::new("no dates given")),
    };

    let defaults = StoreConfig::default();
    Ok(CliArgs {
        store: StoreConfig {
            input_root: input_root.unwrap_or(defaults.input_root),
            output_root: output_root.unwrap_or(defaults.output_root),
            ..defaults
        },
        mode,
    })
}

fn set_date(
    slot: &mut Option<NaiveDate>,
    flag: &str,
    value: Option<&String>,
) -> Result<(), UsageError> {
    if slot.is_some() {
        return Err(UsageError::new(format!("duplicate {flag}")));
    }
    let value = value.ok_or_else(|| UsageError::new(format!("{flag} requires a value")))?;
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| UsageError::new(format!("invalid date: {value}")))?;
    *slot = Some(date);
    Ok(())
}

fn set_path(
    slot: &mut Option<PathBuf>,
    flag: &str,
    value: Option<&String>,
) -> Result<(), UsageError> {
    if slot.is_some() {
        return Err(UsageError::new(format!("duplicate {flag}")));
    }
    let value = value.ok_or_else(|| UsageError::new(format!("{flag} requires a value")))?;
    *slot = Some(PathBuf::from(value));
    Ok(())
}
