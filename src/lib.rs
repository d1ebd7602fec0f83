//! # dialeval
//!
//! Set-based evaluation of dialogue opinion annotations.
//!
//! Compares a gold JSONL file with a prediction JSONL file and reports
//! precision, recall and F1 per task:
//!
//! | Task | Annotation |
//! |------|------------|
//! | `targets` | opinion target span |
//! | `aspects` | aspect label |
//! | `opinions` | opinion span |
//! | `quadruples` | (target, aspect, opinion, sentiment) |
//! | `target-aspect` | (target, aspect) |
//! | `target-opinion` | (target, opinion) |
//! | `aspect-opinion` | (aspect, opinion) |
//!
//! Annotations are compared after normalization (trimmed, case-folded, fixed
//! field order), as unordered sets per sample: duplicates count once.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dialeval::eval::{evaluate, load_annotations, Normalizer};
//! use dialeval::Task;
//!
//! let gold = load_annotations("data/test.json")?;
//! let pred = load_annotations("data/test_predictions.json")?;
//! let report = evaluate(&gold, &pred, &Task::ALL, &Normalizer::default());
//! println!("{report}");
//! # Ok::<(), dialeval::Error>(())
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod task;

pub use config::EvalConfig;
pub use error::{Error, Result};
pub use task::Task;
