//! Step through a quadruple dump one sample at a time.

use std::io::{BufRead, Write};

use serde_json::Value;

use super::dump::QuadrupleDump;
use crate::{Error, Result};

/// Prompt shown after each sample.
pub const PROMPT: &str = "Enter to continue, q to quit: ";

/// Show each sample of `dump` on `output`, waiting for a line on `input`
/// between samples. Stops on `q` or end of input.
///
/// Returns the number of samples shown.
pub fn browse<R: BufRead, W: Write>(dump: &QuadrupleDump, mut input: R, mut output: W) -> Result<usize> {
    let ids = dump.sample_ids();
    let total = ids.len();
    let io_err = |e| Error::io("<stdout>", e);

    let mut shown = 0;
    for (idx, id) in ids.into_iter().enumerate() {
        writeln!(output, "{}", "-".repeat(80)).map_err(io_err)?;
        writeln!(output, "[{}/{}] sample_id: {}", idx + 1, total, id).map_err(io_err)?;
        writeln!(output, "gold: {}", summarize(dump.gold.get(id))).map_err(io_err)?;
        writeln!(output, "pred: {}", summarize(dump.pred.get(id))).map_err(io_err)?;
        write!(output, "{PROMPT}").map_err(io_err)?;
        output.flush().map_err(io_err)?;
        shown += 1;

        let mut answer = String::new();
        let read = input
            .read_line(&mut answer)
            .map_err(|e| Error::io("<stdin>", e))?;
        if read == 0 {
            writeln!(output).map_err(io_err)?;
            break;
        }
        if answer.trim().eq_ignore_ascii_case("q") {
            break;
        }
    }
    Ok(shown)
}

fn summarize(items: Option<&Vec<Value>>) -> String {
    match items {
        Some(items) if !items.is_empty() => {
            serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
        }
        _ => "[]".to_string(),
    }
}
