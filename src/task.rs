//! Annotation task types.
//!
//! A dialogue sample carries annotations for several tasks. Four of them are
//! scored directly (targets, aspects, opinions, quadruples) and three are the
//! pairwise projections of a quadruple.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::Error;

/// One scored annotation task.
///
/// The declaration order is the report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum Task {
    /// Opinion target spans
    Targets,
    /// Aspect labels
    Aspects,
    /// Opinion spans
    Opinions,
    /// (target, aspect, opinion, sentiment) tuples
    Quadruples,
    /// (target, aspect) pairs
    TargetAspect,
    /// (target, opinion) pairs
    TargetOpinion,
    /// (aspect, opinion) pairs
    AspectOpinion,
}

/// Field names of a quadruple, in tuple order.
pub const QUADRUPLE_FIELDS: [&str; 4] = ["target", "aspect", "opinion", "sentiment"];

impl Task {
    /// Every task, in report order.
    pub const ALL: [Task; 7] = [
        Task::Targets,
        Task::Aspects,
        Task::Opinions,
        Task::Quadruples,
        Task::TargetAspect,
        Task::TargetOpinion,
        Task::AspectOpinion,
    ];

    /// The name used in `task_type` fields and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Task::Targets => "targets",
            Task::Aspects => "aspects",
            Task::Opinions => "opinions",
            Task::Quadruples => "quadruples",
            Task::TargetAspect => "target-aspect",
            Task::TargetOpinion => "target-opinion",
            Task::AspectOpinion => "aspect-opinion",
        }
    }

    /// All task names, in report order.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }

    /// Object keys that make up one annotation of this task, in tuple order.
    ///
    /// Empty for the single-field tasks, whose annotations are plain values.
    #[must_use]
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Task::Targets | Task::Aspects | Task::Opinions => &[],
            Task::Quadruples => &QUADRUPLE_FIELDS,
            Task::TargetAspect => &["target", "aspect"],
            Task::TargetOpinion => &["target", "opinion"],
            Task::AspectOpinion => &["aspect", "opinion"],
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| Error::unknown_task(name))
    }
}

/// Deduplicate a task list, keeping the first occurrence of each.
#[must_use]
pub fn dedup_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut out: Vec<Task> = Vec::with_capacity(tasks.len());
    for &task in tasks {
        if !out.contains(&task) {
            out.push(task);
        }
    }
    out
}
