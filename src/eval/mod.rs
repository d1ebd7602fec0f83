//! Gold-versus-prediction evaluation.
//!
//! # Overview
//!
//! ```text
//! gold.jsonl ─┐                                   ┌─> EvalReport (table / JSON)
//!             ├─ loader ─> normalize ─> scorer ───┤
//! pred.jsonl ─┘                                   └─> QuadrupleDump (dump mode)
//! ```
//!
//! - [`loader`]: JSONL records grouped by sample and task
//! - [`normalize`]: payloads to canonical annotation sets
//! - [`scorer`]: per-task TP/FP/FN over all samples
//! - [`metrics`]: counts and precision/recall/F1
//! - [`report`]: the per-task table with its `overall` row
//! - [`dump`] / [`browse`]: quadruple inspection
//!
//! # Example
//!
//! ```rust
//! use dialeval::eval::{evaluate, AnnotationFile, Normalizer};
//! use dialeval::Task;
//!
//! let gold = AnnotationFile::parse(
//!     r#"{"sample_id": 1, "task_type": "targets", "target": "battery life"}"#,
//!     "gold.jsonl",
//! )?;
//! let pred = AnnotationFile::parse(
//!     r#"{"sample_id": 1, "task_type": "targets", "target": "BATTERY LIFE "}"#,
//!     "pred.jsonl",
//! )?;
//!
//! let report = evaluate(&gold, &pred, &Task::ALL, &Normalizer::default());
//! assert_eq!(report.get(Task::Targets).unwrap().counts.tp, 1);
//! # Ok::<(), dialeval::Error>(())
//! ```

pub mod browse;
pub mod dump;
pub mod loader;
pub mod metrics;
pub mod normalize;
pub mod report;
pub mod scorer;

pub use browse::browse;
pub use dump::QuadrupleDump;
pub use loader::{load_annotations, AnnotationFile, SampleId};
pub use metrics::Counts;
pub use normalize::{NormalizeOptions, Normalized, Normalizer, NON_OPINION_SENTINEL};
pub use report::{EvalReport, TaskMetrics};
pub use scorer::{evaluate, score_task};
