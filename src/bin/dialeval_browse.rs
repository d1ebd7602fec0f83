//! dialeval-browse - page through a quadruple dump
//!
//! ```bash
//! dialeval --gold gold.jsonl --pred pred.jsonl --dump-quadruples quadruples_dump.json
//! dialeval-browse quadruples_dump.json
//! ```

use std::process::ExitCode;

use clap::Parser;

use dialeval::cli::commands::browse;
use dialeval::cli::{init_logging, report_error, BrowseCli};

fn main() -> ExitCode {
    let args = BrowseCli::parse();
    init_logging(i8::try_from(args.verbose).unwrap_or(i8::MAX));

    match browse::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
