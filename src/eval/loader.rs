//! JSONL annotation loading.
//!
//! Both the gold file and the prediction file hold one JSON object per line:
//!
//! ```text
//! {"sample_id": "d17", "task_type": "targets", "target": "battery life"}
//! {"sample_id": "d17", "task_type": "quadruples", "target": [["battery life", "battery", "great", "pos"]]}
//! ```
//!
//! Records are grouped by sample id, then by task. Lines whose `task_type`
//! is not a scored task (reply generation, for instance) are counted and
//! skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{Error, Result, Task};

/// Identifier of one dialogue sample.
///
/// Numeric ids are kept as their decimal text, so `1` and `"1"` are the same
/// sample.
pub type SampleId = String;

/// Raw target payloads of one sample, per task, in file order.
pub type SampleTasks = BTreeMap<Task, Vec<Value>>;

/// All records of one annotation file.
#[derive(Debug, Clone, Default)]
pub struct AnnotationFile {
    /// Where the records came from.
    pub source: PathBuf,
    /// Sample id -> task -> raw target payloads.
    pub samples: BTreeMap<SampleId, SampleTasks>,
    /// Records whose `task_type` is not a scored task.
    pub skipped: usize,
    /// Number of records read, skipped ones included.
    pub records: usize,
}

impl AnnotationFile {
    /// Parse JSONL content. `source` is only used in error messages.
    pub fn parse(content: &str, source: impl Into<PathBuf>) -> Result<Self> {
        let mut file = AnnotationFile {
            source: source.into(),
            ..Default::default()
        };

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let obj: Value = serde_json::from_str(line)
                .map_err(|e| Error::parse(&file.source, line_no, e.to_string()))?;
            let Value::Object(mut obj) = obj else {
                return Err(Error::invalid_record(
                    &file.source,
                    line_no,
                    "expected a JSON object",
                ));
            };

            let sample_id = sample_id_of(obj.get("sample_id"))
                .map_err(|msg| Error::invalid_record(&file.source, line_no, msg))?;

            let task_name = match obj.get("task_type") {
                Some(Value::String(s)) => s.trim().to_string(),
                Some(_) => {
                    return Err(Error::invalid_record(
                        &file.source,
                        line_no,
                        "task_type must be a string",
                    ))
                }
                None => {
                    return Err(Error::invalid_record(
                        &file.source,
                        line_no,
                        "missing task_type",
                    ))
                }
            };

            file.records += 1;

            let Ok(task) = task_name.parse::<Task>() else {
                log::debug!(
                    "{}:{}: skipping unscored task_type '{}'",
                    file.source.display(),
                    line_no,
                    task_name
                );
                file.skipped += 1;
                continue;
            };

            let target = obj.remove("target").unwrap_or(Value::Null);
            file.samples
                .entry(sample_id)
                .or_default()
                .entry(task)
                .or_default()
                .push(target);
        }

        log::debug!(
            "{}: {} records, {} samples, {} skipped",
            file.source.display(),
            file.records,
            file.samples.len(),
            file.skipped
        );
        Ok(file)
    }

    /// Raw payloads of `task` for `sample_id`; empty when absent.
    #[must_use]
    pub fn payloads(&self, sample_id: &str, task: Task) -> &[Value] {
        self.samples
            .get(sample_id)
            .and_then(|tasks| tasks.get(&task))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `sample_id` has at least one record for `task`.
    #[must_use]
    pub fn has_task(&self, sample_id: &str, task: Task) -> bool {
        self.samples
            .get(sample_id)
            .is_some_and(|tasks| tasks.contains_key(&task))
    }

    /// Sample ids present in this file.
    pub fn sample_ids(&self) -> impl Iterator<Item = &SampleId> {
        self.samples.keys()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the file held no scored records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Read and parse a JSONL annotation file.
pub fn load_annotations(path: impl AsRef<Path>) -> Result<AnnotationFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    AnnotationFile::parse(&content, path)
}

fn sample_id_of(value: Option<&Value>) -> std::result::Result<SampleId, &'static str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err("empty sample_id"),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Null) | None => Err("missing sample_id"),
        Some(_) => Err("sample_id must be a string or a number"),
    }
}
