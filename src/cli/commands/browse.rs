//! Browse command - page through a quadruple dump

use std::io;

use crate::cli::parser::BrowseCli;
use crate::eval::{browse, QuadrupleDump};
use crate::Result;

/// Page through the dump named in `args` on the terminal.
pub fn run(args: &BrowseCli) -> Result<()> {
    let dump = QuadrupleDump::load(&args.path)?;
    let stdin = io::stdin();
    let shown = browse(&dump, stdin.lock(), io::stdout().lock())?;
    log::info!("viewed {} of {} samples", shown, dump.sample_ids().len());
    Ok(())
}
