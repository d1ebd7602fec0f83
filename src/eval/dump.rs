//! Normalized quadruple dumps for manual inspection.
//!
//! ```text
//! {
//!   "gold": {"d17": [["battery life", "battery", "great", "pos"]]},
//!   "pred": {"d17": []}
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::loader::{AnnotationFile, SampleId};
use super::normalize::Normalizer;
use super::scorer::sample_union;
use crate::{Error, Result, Task};

/// Normalized quadruples of both files, keyed by sample id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadrupleDump {
    /// Gold quadruples.
    #[serde(default)]
    pub gold: BTreeMap<SampleId, Vec<Value>>,
    /// Predicted quadruples.
    #[serde(default)]
    pub pred: BTreeMap<SampleId, Vec<Value>>,
}

impl QuadrupleDump {
    /// Collect the quadruples of every sample that has a quadruples record
    /// in either file. A side without quadruples for that sample gets `[]`.
    #[must_use]
    pub fn collect(gold: &AnnotationFile, pred: &AnnotationFile, normalizer: &Normalizer) -> Self {
        let mut dump = QuadrupleDump::default();
        for id in sample_union(gold, pred) {
            if !gold.has_task(id, Task::Quadruples) && !pred.has_task(id, Task::Quadruples) {
                continue;
            }
            dump.gold.insert(id.clone(), quadruples(gold, id, normalizer));
            dump.pred.insert(id.clone(), quadruples(pred, id, normalizer));
        }
        dump
    }

    /// Parse a dump previously written by [`QuadrupleDump::write`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| Error::parse(path, e.line(), e.to_string()))
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to `path`, or to standard output when `path` is `None`.
    pub fn write(&self, path: Option<&Path>) -> Result<()> {
        let mut serialized = self.to_json()?;
        serialized.push('\n');
        match path {
            Some(path) => {
                fs::write(path, serialized).map_err(|e| Error::io(path, e))?;
                log::info!("wrote {} samples to {}", self.gold.len(), path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(serialized.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| Error::io("<stdout>", e))?;
            }
        }
        Ok(())
    }

    /// Sample ids present on either side, sorted.
    #[must_use]
    pub fn sample_ids(&self) -> Vec<&SampleId> {
        let mut ids: Vec<&SampleId> = self.gold.keys().chain(self.pred.keys()).collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

fn quadruples(file: &AnnotationFile, id: &str, normalizer: &Normalizer) -> Vec<Value> {
    normalizer
        .annotations(Task::Quadruples, file.payloads(id, Task::Quadruples))
        .iter()
        .map(|q| q.to_value())
        .collect()
}
