//! Canonicalization of annotation payloads.
//!
//! Gold and predicted annotations are compared as sets, so two annotations
//! that differ only in case, surrounding whitespace, or the key order of a
//! JSON object must map to the same [`Normalized`] value.
//!
//! # Payload shapes
//!
//! A record's `target` may be:
//!
//! - a plain string (`"battery life"`);
//! - a string holding serialized JSON (`"[[\"screen\", \"display\", \"sharp\", \"pos\"]]"`);
//! - a JSON array of items, each item a string, an array, or an object;
//! - for quadruple and pair tasks, a single flat tuple (`["screen", "display"]`
//!   for target-aspect), which counts as one annotation;
//! - the non-opinion sentinel `statement-non-opinion`, meaning "no annotations".
//!
//! Quadruple and pair objects are flattened to tuples in the task's field
//! order (see [`Task::fields`]), so `{"aspect": "a", "target": "t"}` and
//! `["t", "a"]` agree for the target-aspect task.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Task;

/// Sentinel marking a sample without opinion annotations.
pub const NON_OPINION_SENTINEL: &str = "statement-non-opinion";

/// A canonical, ordered, hashable annotation value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Normalized {
    /// Trimmed (and by default lowercased) text. Numbers and booleans are
    /// kept as their JSON text, so `1` and `"1"` agree.
    Text(String),
    /// Ordered elements.
    Tuple(Vec<Normalized>),
    /// Object entries sorted by key.
    Map(Vec<(String, Normalized)>),
}

impl Normalized {
    /// Render back to JSON. Tuples become arrays.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Normalized::Text(s) => Value::String(s.clone()),
            Normalized::Tuple(items) => Value::Array(items.iter().map(Self::to_value).collect()),
            Normalized::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl Serialize for Normalized {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Options controlling normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeOptions {
    /// Lowercase text values.
    pub case_fold: bool,
    /// Payload strings meaning "no annotation" (compared case-insensitively).
    pub ignore: Vec<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            case_fold: true,
            ignore: vec![NON_OPINION_SENTINEL.to_string()],
        }
    }
}

/// Turns raw target payloads into annotation sets.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    #[must_use]
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize every payload of one (sample, task) into a set.
    #[must_use]
    pub fn annotations(&self, task: Task, payloads: &[Value]) -> BTreeSet<Normalized> {
        let mut set = BTreeSet::new();
        for payload in payloads {
            for item in self.expand(task, payload) {
                if is_blank(&item) {
                    continue;
                }
                set.insert(self.normalize(task, &item));
            }
        }
        set
    }

    /// Normalize a single annotation item.
    ///
    /// Applying this to the [`Normalized::to_value`] of its own output
    /// returns the same value.
    #[must_use]
    pub fn normalize(&self, task: Task, item: &Value) -> Normalized {
        match item {
            Value::Object(obj) if has_any_field(obj, task.fields()) => Normalized::Tuple(
                task.fields()
                    .iter()
                    .map(|field| match lookup_field(obj, field) {
                        Some(v) => self.normalize_value(v),
                        None => Normalized::Text(String::new()),
                    })
                    .collect(),
            ),
            other => self.normalize_value(other),
        }
    }

    fn normalize_value(&self, value: &Value) -> Normalized {
        match value {
            Value::String(s) => Normalized::Text(self.text(s)),
            Value::Number(n) => Normalized::Text(self.text(&n.to_string())),
            Value::Bool(b) => Normalized::Text(b.to_string()),
            Value::Null => Normalized::Text(String::new()),
            Value::Array(items) => {
                Normalized::Tuple(items.iter().map(|v| self.normalize_value(v)).collect())
            }
            Value::Object(obj) => {
                let mut entries: Vec<(String, Normalized)> = obj
                    .iter()
                    .map(|(k, v)| (k.trim().to_string(), self.normalize_value(v)))
                    .collect();
                entries.sort();
                // " a" and "a" trim to the same key; keep one.
                entries.dedup_by(|later, earlier| later.0 == earlier.0);
                Normalized::Map(entries)
            }
        }
    }

    fn text(&self, s: &str) -> String {
        let trimmed = s.trim();
        if self.options.case_fold {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        }
    }

    fn is_ignored(&self, s: &str) -> bool {
        self.options
            .ignore
            .iter()
            .any(|marker| marker.trim().eq_ignore_ascii_case(s))
    }

    /// Split one payload into annotation items.
    ///
    /// An array is a list of items, except that a flat array with exactly
    /// one element per task field is a single tuple.
    fn expand(&self, task: Task, payload: &Value) -> Vec<Value> {
        let parsed = match payload {
            Value::String(s) => {
                let text = s.trim();
                if text.is_empty() || self.is_ignored(text) {
                    return Vec::new();
                }
                match serde_json::from_str::<Value>(text) {
                    Ok(v @ (Value::Array(_) | Value::Object(_))) => v,
                    _ => Value::String(text.to_string()),
                }
            }
            other => other.clone(),
        };

        match parsed {
            Value::Array(items) if is_flat_tuple(task, &items) => vec![Value::Array(items)],
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        }
    }
}

fn is_blank(item: &Value) -> bool {
    match item {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn is_flat_tuple(task: Task, items: &[Value]) -> bool {
    let arity = task.fields().len();
    arity > 0
        && items.len() == arity
        && items
            .iter()
            .all(|v| !matches!(v, Value::Array(_) | Value::Object(_)))
}

fn has_any_field(obj: &Map<String, Value>, fields: &[&str]) -> bool {
    fields.iter().any(|f| lookup_field(obj, f).is_some())
}

fn lookup_field<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).or_else(|| {
        obj.iter()
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(field))
            .map(|(_, v)| v)
    })
}
