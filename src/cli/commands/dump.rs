//! Dump command - write normalized quadruples instead of scoring

use std::path::Path;

use crate::cli::parser::Cli;
use crate::eval::QuadrupleDump;
use crate::Result;

use super::{load_pair, Settings};

/// Write the quadruple dump of both files to `output`, or stdout.
pub fn run(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let settings = Settings::resolve(cli)?;
    let (gold, pred) = load_pair(cli)?;

    let dump = QuadrupleDump::collect(&gold, &pred, &settings.normalizer);
    log::info!("dumping quadruples of {} samples", dump.gold.len());
    dump.write(output)
}
