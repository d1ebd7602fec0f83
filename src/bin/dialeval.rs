//! dialeval - dialogue annotation evaluation CLI
//!
//! Compares a gold JSONL file with a prediction JSONL file and prints
//! precision, recall and F1 per task plus an overall row.
//!
//! # Usage
//!
//! ```bash
//! # All tasks
//! dialeval --gold data/test.json --pred data/test_predictions.json
//!
//! # A subset of tasks, as JSON
//! dialeval --gold gold.jsonl --pred pred.jsonl --tasks targets quadruples --json
//!
//! # Normalized quadruples of both files, for manual inspection
//! dialeval --gold gold.jsonl --pred pred.jsonl --dump-quadruples dump.json
//! ```

use std::process::ExitCode;

use clap::Parser;

use dialeval::cli::commands::{dump, evaluate};
use dialeval::cli::{init_logging, report_error, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let result = match &cli.dump_quadruples {
        Some(output) => dump::run(&cli, output.as_deref()),
        None => evaluate::run(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
