//! Command implementations for the dialeval CLI
//!
//! Each command has its own module/file for better organization.

pub mod browse;
pub mod dump;
pub mod evaluate;

use crate::eval::{load_annotations, AnnotationFile, Normalizer};
use crate::task::dedup_tasks;
use crate::{EvalConfig, Result, Task};

use super::parser::Cli;

/// Tasks and normalizer for a run, after merging the config file and flags.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Tasks to evaluate, deduplicated, in request order.
    pub tasks: Vec<Task>,
    /// Normalizer built from the config's options.
    pub normalizer: Normalizer,
}

impl Settings {
    /// Resolve settings: `--tasks` beats the config's `tasks`, which beats
    /// the full task list.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => {
                log::info!("using config {}", path.display());
                EvalConfig::load(path)?
            }
            None => EvalConfig::default(),
        };

        let tasks = match (&cli.tasks, config.tasks()?) {
            (Some(flags), _) => dedup_tasks(flags),
            (None, Some(configured)) => dedup_tasks(&configured),
            (None, None) => Task::ALL.to_vec(),
        };

        Ok(Self {
            tasks,
            normalizer: Normalizer::new(config.normalize),
        })
    }
}

/// Load the gold and prediction files named on the command line.
pub fn load_pair(cli: &Cli) -> Result<(AnnotationFile, AnnotationFile)> {
    let gold = load_annotations(&cli.gold)?;
    let pred = load_annotations(&cli.pred)?;
    log::info!(
        "loaded {} gold samples from {}, {} predicted samples from {}",
        gold.len(),
        cli.gold.display(),
        pred.len(),
        cli.pred.display()
    );
    Ok((gold, pred))
}
