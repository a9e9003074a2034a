use crate::domain::{CompletedTask, Task};
use crate::persistence::files::atomic_write;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Storage key for the current task
pub const CURRENT_TASK_KEY: &str = "monotask";
/// Storage key for the completed-task history
pub const COMPLETED_TASKS_KEY: &str = "monotask_completed";

/// Typed failure for unreadable persisted data.
///
/// A missing key is never an error (it means "absent" / empty history);
/// Corrupt means the file exists but its JSON does not parse.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored data for key '{key}' is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value JSON store backed by one file per key under the data directory
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the raw text for a key; a missing file yields None
    fn read_key(&self, key: &'static str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Some(content))
    }

    /// Load the current task; absent key means no current task
    pub fn load_current(&self) -> Result<Option<Task>> {
        match self.read_key(CURRENT_TASK_KEY)? {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|source| {
                StoreError::Corrupt {
                    key: CURRENT_TASK_KEY,
                    source,
                }
                .into()
            }),
        }
    }

    /// Save the current task; saving None removes the key
    pub fn save_current(&self, task: Option<&Task>) -> Result<()> {
        let path = self.key_path(CURRENT_TASK_KEY);
        match task {
            Some(task) => {
                let json = serde_json::to_string(task)?;
                atomic_write(&path, &json)
            }
            None => {
                if path.exists() {
                    fs::remove_file(&path)
                        .with_context(|| format!("Failed to remove file: {}", path.display()))?;
                }
                Ok(())
            }
        }
    }

    /// Load the completed-task history; absent key means empty history
    pub fn load_completed(&self) -> Result<Vec<CompletedTask>> {
        match self.read_key(COMPLETED_TASKS_KEY)? {
            None => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(|source| {
                StoreError::Corrupt {
                    key: COMPLETED_TASKS_KEY,
                    source,
                }
                .into()
            }),
        }
    }

    /// Save the full completed-task history
    pub fn save_completed(&self, tasks: &[CompletedTask]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        atomic_write(self.key_path(COMPLETED_TASKS_KEY), &json)
    }

    /// Load the current task, falling back to "no current task" on corrupt
    /// data. The fallback policy for unreadable storage: warn and start
    /// clean rather than crash; the next save overwrites the bad file.
    pub fn load_current_or_default(&self) -> Option<Task> {
        match self.load_current() {
            Ok(task) => task,
            Err(e) => {
                eprintln!("Warning: {:#}; starting with no current task", e);
                None
            }
        }
    }

    /// Load the history, falling back to empty on corrupt data
    pub fn load_completed_or_default(&self) -> Vec<CompletedTask> {
        match self.load_completed() {
            Ok(tasks) => tasks,
            Err(e) => {
                eprintln!("Warning: {:#}; starting with an empty history", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_load_missing_keys() {
        let (_dir, store) = test_store();
        assert_eq!(store.load_current().unwrap(), None);
        assert!(store.load_completed().unwrap().is_empty());
    }

    #[test]
    fn test_current_task_round_trip() {
        let (_dir, store) = test_store();
        let task = Task::new("Write report".to_string(), "draft".to_string(), 90);

        store.save_current(Some(&task)).unwrap();
        let loaded = store.load_current().unwrap();
        assert_eq!(loaded, Some(task));
    }

    #[test]
    fn test_save_none_removes_key() {
        let (dir, store) = test_store();
        let task = Task::new("T".to_string(), String::new(), 0);

        store.save_current(Some(&task)).unwrap();
        assert!(dir.path().join("monotask.json").exists());

        store.save_current(None).unwrap();
        assert!(!dir.path().join("monotask.json").exists());
        assert_eq!(store.load_current().unwrap(), None);

        // Removing an already-absent key is a no-op
        store.save_current(None).unwrap();
    }

    #[test]
    fn test_completed_round_trip() {
        let (_dir, store) = test_store();
        let tasks = vec![
            Task::new("a".to_string(), String::new(), 0).into_completed(Local::now()),
            Task::new("b".to_string(), "notes".to_string(), 5).into_completed(Local::now()),
        ];

        store.save_completed(&tasks).unwrap();
        let loaded = store.load_completed().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_clear_persists_empty_array() {
        let (dir, store) = test_store();
        store.save_completed(&[]).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("monotask_completed.json")).unwrap();
        assert_eq!(raw, "[]");
        assert!(store.load_completed().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_current_is_typed_error() {
        let (dir, store) = test_store();
        std::fs::write(dir.path().join("monotask.json"), "not json{{").unwrap();

        let err = store.load_current().unwrap_err();
        let store_err = err.downcast_ref::<StoreError>().expect("typed error");
        assert!(matches!(
            store_err,
            StoreError::Corrupt {
                key: CURRENT_TASK_KEY,
                ..
            }
        ));
    }

    #[test]
    fn test_corrupt_data_falls_back_to_defaults() {
        let (dir, store) = test_store();
        std::fs::write(dir.path().join("monotask.json"), "not json{{").unwrap();
        std::fs::write(dir.path().join("monotask_completed.json"), "[1, 2,").unwrap();

        assert_eq!(store.load_current_or_default(), None);
        assert!(store.load_completed_or_default().is_empty());
    }
}
