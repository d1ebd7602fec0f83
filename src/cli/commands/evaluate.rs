//! Evaluate command - score predictions against gold annotations

use crate::cli::output::{color, metric_colored};
use crate::cli::parser::Cli;
use crate::eval::evaluate;
use crate::Result;

use super::{load_pair, Settings};

/// Print the per-task table (or JSON) for the files named in `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;
    let (gold, pred) = load_pair(cli)?;

    let report = evaluate(&gold, &pred, &settings.tasks, &settings.normalizer);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.table());
    }

    if !cli.quiet {
        eprintln!(
            "{} {} tasks, {} gold / {} predicted samples, overall F1 {}",
            color("1;36", "evaluated"),
            report.tasks.len(),
            gold.len(),
            pred.len(),
            metric_colored(report.overall.f1)
        );
    }
    Ok(())
}
