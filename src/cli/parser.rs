//! CLI argument parsing and structure definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::Task;

/// Dialogue annotation evaluation - precision, recall and F1 per task
#[derive(Parser, Debug, Clone)]
#[command(name = "dialeval")]
#[command(
    version,
    about = "Dialogue annotation evaluation - precision, recall and F1 per task",
    long_about = r#"
dialeval - compare gold and predicted dialogue annotations

Both files hold one JSON object per line:
  {"sample_id": "d1", "task_type": "targets", "target": "battery life"}

Annotations are compared per sample as sets, after trimming and
case-folding. Quadruples and pairs are compared field by field in the
fixed order (target, aspect, opinion, sentiment).

TASKS:
  targets, aspects, opinions, quadruples,
  target-aspect, target-opinion, aspect-opinion

EXAMPLES:
  dialeval --gold data/test.json --pred data/test_predictions.json
  dialeval --gold gold.jsonl --pred pred.jsonl --tasks targets quadruples
  dialeval --gold gold.jsonl --pred pred.jsonl --dump-quadruples dump.json
"#
)]
pub struct Cli {
    /// Gold annotation file (JSONL)
    #[arg(long, value_name = "PATH")]
    pub gold: PathBuf,

    /// Prediction file (JSONL)
    #[arg(long, value_name = "PATH")]
    pub pred: PathBuf,

    /// Tasks to evaluate (default: all)
    #[arg(long, value_name = "TASK", value_enum, num_args = 1.., value_delimiter = ',')]
    pub tasks: Option<Vec<Task>>,

    /// Write normalized quadruples of both files to PATH (stdout if omitted) instead of scoring
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub dump_quadruples: Option<Option<PathBuf>>,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "dump_quadruples")]
    pub json: bool,

    /// TOML config file with default tasks and normalization options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log verbosity: -1 for `--quiet`, otherwise the `-v` count.
    #[must_use]
    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            i8::try_from(self.verbose).unwrap_or(i8::MAX)
        }
    }
}

/// Page through a quadruple dump written by `dialeval --dump-quadruples`
#[derive(Parser, Debug, Clone)]
#[command(name = "dialeval-browse", version)]
pub struct BrowseCli {
    /// Dump file
    #[arg(value_name = "PATH", default_value = "quadruples_dump.json")]
    pub path: PathBuf,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
