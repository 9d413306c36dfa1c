//! Date-range driver with per-date failure isolation.
//!
//! A failure analyzing one date must not abort processing of subsequent
//! dates: it is captured in the batch report, logged to stderr as
//! `Failed {date}: {error}`, and iteration continues. No retries, no
//! timeouts, no cancellation.

use chrono::NaiveDate;
use eod_analysis::EodClassifier;
use eod_core::{Error, Result};
use eod_store::EodStore;
use std::path::PathBuf;
use tracing::info;

/// Result of analyzing one date.
#[derive(Debug)]
pub struct DateOutcome {
    /// The analyzed date.
    pub date: NaiveDate,
    /// Written artifact path, or the error that stopped this date.
    pub result: Result<PathBuf>,
}

impl DateOutcome {
    /// Did this date produce an output file?
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-date outcomes of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per date, in iteration order.
    pub outcomes: Vec<DateOutcome>,
}

impl BatchReport {
    /// Number of dates that produced an output file.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of dates that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Did every date succeed?
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// Analyze one date: load the candle, classify it, persist the state.
///
/// Returns the written artifact path.
pub fn analyze_date(
    store: &EodStore,
    classifier: &EodClassifier,
    date: NaiveDate,
) -> Result<PathBuf> {
    let candle = store.load_candle(date)?;
    let state = classifier.classify(&candle)?;
    store.persist_state(date, &state)
}

/// Analyze an inclusive date range sequentially, isolating failures per
/// date.
///
/// Fails fast only on an inverted range; per-date failures are collected
/// in the report and echoed to stderr.
pub fn run_range(
    store: &EodStore,
    classifier: &EodClassifier,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BatchReport> {
    if end < start {
        return Err(Error::validation("end date must be on or after start date"));
    }

    let mut report = BatchReport::default();
    for date in start.iter_days().take_while(|d| *d <= end) {
        let result = analyze_date(store, classifier, date);
        if let Err(err) = &result {
            eprintln!("Failed {date}: {err}");
        }
        report.outcomes.push(DateOutcome { date, result });
    }

    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_store(dir: &std::path::Path) -> EodStore {
        EodStore::with_roots(dir.join("input"), dir.join("history"))
    }

    fn seed_input(store: &EodStore, day: NaiveDate, close: f64) {
        let record = json!([{
            "trade_date": day.format("%Y-%m-%d").to_string(),
            "open": 100.0,
            "high": 110.0,
            "low": 95.0,
            "close": close,
            "volume": 1000
        }]);
        let path = store.input_path(day);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_vec(&record).unwrap()).unwrap();
    }

    #[test]
    fn test_analyze_date_writes_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let day = date("2024-01-05");
        seed_input(&store, day, 108.0);

        let path = analyze_date(&store, &EodClassifier::default(), day).unwrap();
        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(written["meta"]["trade_date"], "2024-01-05");
        assert_eq!(written["price_structure"]["trend"], "UP");
    }

    #[test]
    fn test_analyze_date_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());

        let err = analyze_date(&store, &EodClassifier::default(), date("2024-01-05")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!store.output_path(date("2024-01-05")).exists());
    }

    #[test]
    fn test_run_range_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let classifier = EodClassifier::default();

        // Three-day range with the middle day's input file missing.
        seed_input(&store, date("2024-01-05"), 108.0);
        seed_input(&store, date("2024-01-07"), 96.0);

        let report = run_range(
            &store,
            &classifier,
            date("2024-01-05"),
            date("2024-01-07"),
        )
        .unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_clean());

        let failed: Vec<NaiveDate> = report
            .outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.date)
            .collect();
        assert_eq!(failed, vec![date("2024-01-06")]);

        assert!(store.output_path(date("2024-01-05")).exists());
        assert!(!store.output_path(date("2024-01-06")).exists());
        assert!(store.output_path(date("2024-01-07")).exists());
    }

    #[test]
    fn test_run_range_single_day() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        seed_input(&store, date("2024-01-05"), 108.0);

        let report = run_range(
            &store,
            &EodClassifier::default(),
            date("2024-01-05"),
            date("2024-01-05"),
        )
        .unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_run_range_rejects_inverted_range() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());

        let err = run_range(
            &store,
            &EodClassifier::default(),
            date("2024-01-31"),
            date("2024-01-01"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("on or after"));
    }

    #[test]
    fn test_run_range_continues_after_bad_payload() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let classifier = EodClassifier::default();

        seed_input(&store, date("2024-01-05"), 108.0);
        // Corrupt day: not an array.
        let bad_path = store.input_path(date("2024-01-06"));
        fs::create_dir_all(bad_path.parent().unwrap()).unwrap();
        fs::write(bad_path, b"{\"trade_date\": \"2024-01-06\"}").unwrap();

        let report = run_range(
            &store,
            &classifier,
            date("2024-01-05"),
            date("2024-01-06"),
        )
        .unwrap();
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
    }
}
