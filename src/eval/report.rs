//! Evaluation report.
//!
//! One row per evaluated task plus an `overall` row whose counts are the sum
//! of the task rows (micro average).
//!
//! # Example
//!
//! ```rust
//! use dialeval::eval::metrics::Counts;
//! use dialeval::eval::report::EvalReport;
//! use dialeval::Task;
//!
//! let report = EvalReport::from_counts(vec![(Task::Targets, Counts::new(1, 0, 0))]);
//! assert!(report.table().lines().last().unwrap().starts_with("overall"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::metrics::Counts;
use crate::Task;

/// Label of the summed row.
pub const OVERALL: &str = "overall";

const TASK_WIDTH: usize = 15;
const COUNT_WIDTH: usize = 8;
const SCORE_WIDTH: usize = 10;

/// Metrics of one report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMetrics {
    /// Task name, or `overall`.
    pub task: String,
    /// Raw counts.
    #[serde(flatten)]
    pub counts: Counts,
    /// TP / (TP + FP)
    pub precision: f64,
    /// TP / (TP + FN)
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f1: f64,
}

impl TaskMetrics {
    /// Derive the scores of a row from its counts.
    #[must_use]
    pub fn new(task: impl Into<String>, counts: Counts) -> Self {
        Self {
            task: task.into(),
            counts,
            precision: counts.precision(),
            recall: counts.recall(),
            f1: counts.f1(),
        }
    }

    fn row(&self) -> String {
        format!(
            "{:<tw$}{:>cw$}{:>cw$}{:>cw$}{:>sw$.4}{:>sw$.4}{:>sw$.4}",
            self.task,
            self.counts.tp,
            self.counts.fp,
            self.counts.fn_,
            self.precision,
            self.recall,
            self.f1,
            tw = TASK_WIDTH,
            cw = COUNT_WIDTH,
            sw = SCORE_WIDTH,
        )
    }
}

/// Per-task and overall metrics of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Per-task rows, in evaluation order.
    pub tasks: Vec<TaskMetrics>,
    /// Sum over `tasks`.
    pub overall: TaskMetrics,
}

impl EvalReport {
    /// Build a report from per-task counts.
    #[must_use]
    pub fn from_counts(counts: Vec<(Task, Counts)>) -> Self {
        let total: Counts = counts.iter().map(|(_, c)| *c).sum();
        Self {
            tasks: counts
                .into_iter()
                .map(|(task, c)| TaskMetrics::new(task.as_str(), c))
                .collect(),
            overall: TaskMetrics::new(OVERALL, total),
        }
    }

    /// Row of `task`, if it was evaluated.
    #[must_use]
    pub fn get(&self, task: Task) -> Option<&TaskMetrics> {
        self.tasks.iter().find(|m| m.task == task.as_str())
    }

    /// Fixed-width text table.
    #[must_use]
    pub fn table(&self) -> String {
        let header = format!(
            "{:<tw$}{:>cw$}{:>cw$}{:>cw$}{:>sw$}{:>sw$}{:>sw$}",
            "Task",
            "TP",
            "FP",
            "FN",
            "P",
            "R",
            "F1",
            tw = TASK_WIDTH,
            cw = COUNT_WIDTH,
            sw = SCORE_WIDTH,
        );
        let rule = "-".repeat(header.len());
        let mut rows = vec![header, rule];
        rows.extend(self.tasks.iter().map(TaskMetrics::row));
        rows.push(self.overall.row());
        rows.join("\n")
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.table())
    }
}
