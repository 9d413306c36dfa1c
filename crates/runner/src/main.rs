//! CLI entry point for the EOD analyzer.

mod cli;
mod driver;

use cli::RunMode;
use eod_analysis::EodClassifier;
use eod_store::EodStore;
use tracing::info;

fn main() {
    tracing_subscriber::fmt::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run(&args));
}

fn run(args: &[String]) -> i32 {
    let cli = match cli::parse(args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", cli::USAGE);
            return 2;
        }
    };

    let store = EodStore::new(cli.store);
    let classifier = EodClassifier::default();

    match cli.mode {
        RunMode::Single(date) => {
            match driver::analyze_date(&store, &classifier, date) {
                Ok(path) => {
                    info!(path = %path.display(), "analyzed {date}");
                    0
                }
                Err(err) => {
                    eprintln!("Failed {date}: {err}");
                    1
                }
            }
        }
        RunMode::Range(start, end) => {
            // Partial batch failures are expected and tolerated; only an
            // invalid range itself fails the run.
            match driver::run_range(&store, &classifier, start, end) {
                Ok(_) => 0,
                Err(err) => {
                    eprintln!("Failed {start}..{end}: {err}");
                    1
                }
            }
        }
    }
}
