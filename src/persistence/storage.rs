use crate::domain::Task;
use crate::error::StorageError;
use crate::persistence::files::{atomic_write, read_file, tasks_file};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable home of the task collection
pub trait TaskStorage {
    /// Load persisted tasks. Missing or unreadable payloads load as an empty list.
    fn load(&self) -> Vec<Task>;

    /// Replace the persisted collection with `tasks`
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Tasks stored as a JSON array in `taskmaster-tasks.json`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage for the task collection inside `data_dir`
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: tasks_file(data_dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, distinguishing a corrupt payload from a missing one
    pub fn try_load(&self) -> Result<Vec<Task>, StorageError> {
        let content = match read_file(&self.path) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read stored tasks");
                return Ok(Vec::new());
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| StorageError::LoadCorrupt {
                path: self.path.clone(),
                source,
            })?;

        // Drop entries that break the non-blank invariant instead of surfacing them
        let before = tasks.len();
        let tasks: Vec<Task> = tasks.into_iter().filter(Task::is_valid).collect();
        if tasks.len() != before {
            warn!(dropped = before - tasks.len(), "skipped stored tasks with blank fields");
        }

        Ok(tasks)
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                debug!(count = tasks.len(), path = %self.path.display(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(error = %e, "starting with an empty task list");
                Vec::new()
            }
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let write_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            StorageError::WriteFailed {
                path: self.path.clone(),
                source,
            }
        };

        let json = serde_json::to_string_pretty(tasks).map_err(|e| write_failed(e.into()))?;
        atomic_write(&self.path, &json).map_err(|e| write_failed(e.into()))?;

        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub tasks: Vec<Task>,
    pub saves: usize,
    pub fail_writes: bool,
}

#[cfg(test)]
impl TaskStorage for MemoryStorage {
    fn load(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed {
                path: PathBuf::from("memory"),
                source: "quota exceeded".into(),
            });
        }
        self.tasks = tasks.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new(1_700_000_000_001, "Lab report", "chem", Local::now()).unwrap();
        done.completed = true;
        vec![
            Task::new(1_700_000_000_000, "Read ch.3", "math", Local::now()).unwrap(),
            done,
            Task::new(1_700_000_000_002, "Essay draft", "english", Local::now()).unwrap(),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let mut storage = JsonFileStorage::new(temp_dir.path());
        let tasks = sample_tasks();

        storage.save(&tasks).unwrap();

        let reloaded = JsonFileStorage::new(temp_dir.path()).load();
        assert_eq!(reloaded, tasks);
    }

    #[test]
    fn test_corrupt_payload_loads_empty() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());
        std::fs::write(storage.path(), "[{\"id\": 1, \"text\": ").unwrap();

        assert!(matches!(storage.try_load(), Err(StorageError::LoadCorrupt { .. })));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());
        std::fs::write(storage.path(), "{\"tasks\": []}").unwrap();

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());
        let json = r#"[
            {"id": 1, "text": "  ", "subject": "MATH", "completed": false, "createdAt": "2024-05-05T09:00:00Z"},
            {"id": 2, "text": "Essay", "subject": "ENGLISH", "completed": false, "createdAt": "2024-05-05T09:00:00Z"}
        ]"#;
        std::fs::write(storage.path(), json).unwrap();

        let tasks = storage.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 2);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let mut storage = JsonFileStorage::new(&temp_dir.path().join("gone"));

        let err = storage.save(&sample_tasks()).unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
