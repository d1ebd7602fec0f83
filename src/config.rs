//! TOML configuration.
//!
//! ```toml
//! tasks = ["targets", "quadruples"]
//!
//! [normalize]
//! case_fold = true
//! ignore = ["statement-non-opinion"]
//! ```
//!
//! Every key is optional; command-line flags take precedence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::eval::NormalizeOptions;
use crate::{Error, Result, Task};

/// Evaluation settings read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Task names to evaluate; all tasks when absent.
    pub tasks: Option<Vec<String>>,
    /// Normalization options.
    pub normalize: NormalizeOptions,
}

impl EvalConfig {
    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&content, path)
    }

    /// Parse TOML content. `path` is only used in error messages.
    pub fn from_toml(content: &str, path: impl AsRef<Path>) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(path.as_ref(), e.message()))
    }

    /// Configured tasks, validated. `None` when the file names no tasks.
    pub fn tasks(&self) -> Result<Option<Vec<Task>>> {
        self.tasks
            .as_ref()
            .map(|names| names.iter().map(|n| n.parse()).collect::<Result<Vec<Task>>>())
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = EvalConfig::from_toml("", "c.toml").unwrap();
        assert_eq!(config, EvalConfig::default());
        assert!(config.normalize.case_fold);
        assert_eq!(config.tasks().unwrap(), None);
    }

    #[test]
    fn reads_tasks_and_options() {
        let config = EvalConfig::from_toml(
            r#"
tasks = ["quadruples", "targets"]

[normalize]
case_fold = false
"#,
            "c.toml",
        )
        .unwrap();
        assert_eq!(
            config.tasks().unwrap(),
            Some(vec![Task::Quadruples, Task::Targets])
        );
        assert!(!config.normalize.case_fold);
        // Missing keys keep their defaults.
        assert_eq!(config.normalize.ignore, vec!["statement-non-opinion"]);
    }

    #[test]
    fn unknown_task_is_rejected() {
        let config = EvalConfig::from_toml(r#"tasks = ["reply"]"#, "c.toml").unwrap();
        assert!(matches!(config.tasks(), Err(Error::UnknownTask(_))));
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = EvalConfig::from_toml("colour = true", "c.toml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("c.toml"));
    }
}
