//! Owned task list with subject filtering.
//!
//! Mutators never touch storage themselves. Each successful change returns a
//! [`PersistIntent`] carrying the full list, which the caller hands to a
//! [`TaskStorage`](crate::persistence::TaskStorage).

use crate::clock::Clock;
use crate::domain::{filter_tasks, unique_subjects, Task};
use crate::error::TaskError;
use std::rc::Rc;
use tracing::debug;

/// Request to persist the full task list after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a mutation is only durable once its intent is executed"]
pub struct PersistIntent {
    tasks: Vec<Task>,
}

impl PersistIntent {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: i64,
    clock: Rc<dyn Clock>,
}

impl TaskStore {
    /// Wrap previously loaded tasks
    pub fn new(tasks: Vec<Task>, clock: Rc<dyn Clock>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            tasks,
            last_id,
            clock,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task. Blank text or subject is rejected and nothing changes.
    pub fn add_task(&mut self, text: &str, subject: &str) -> Result<PersistIntent, TaskError> {
        let created_at = self.clock.now();
        let id = self.next_id(created_at.timestamp_millis());
        let task = Task::new(id, text, subject, created_at)?;

        debug!(id, subject = %task.subject, "task added");
        self.last_id = self.last_id.max(id);
        self.tasks.push(task);
        Ok(self.intent())
    }

    /// Flip completion for `id`; None if no task matches
    pub fn toggle_task(&mut self, id: i64) -> Option<PersistIntent> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.toggle();
        debug!(id, completed = task.completed, "task toggled");
        Some(self.intent())
    }

    /// Remove `id`; None if no task matches
    pub fn delete_task(&mut self, id: i64) -> Option<PersistIntent> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.remove(index);
        debug!(id, "task deleted");
        Some(self.intent())
    }

    /// `ALL` followed by distinct subjects in first-seen order
    pub fn list_subjects(&self) -> Vec<String> {
        unique_subjects(&self.tasks)
    }

    /// Tasks for `subject` (`ALL` matches everything), insertion order preserved
    pub fn filter_by_subject(&self, subject: &str) -> Vec<&Task> {
        filter_tasks(&self.tasks, subject)
    }

    // Millisecond timestamps, bumped past the last id so two adds in the
    // same millisecond still get distinct, increasing ids. Once a stored id
    // sits at i64::MAX there is nothing above it, so take the first free id
    // from the current timestamp instead.
    fn next_id(&self, now_millis: i64) -> i64 {
        match self.last_id.checked_add(1) {
            Some(next) => now_millis.max(next),
            None => (now_millis..i64::MAX)
                .chain(0..now_millis)
                .find(|id| self.get(*id).is_none())
                .unwrap_or(now_millis),
        }
    }

    fn intent(&self) -> PersistIntent {
        PersistIntent {
            tasks: self.tasks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::domain::ALL_SUBJECTS;
    use chrono::{Duration, Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn create_test_store() -> (TaskStore, Rc<ManualClock>) {
        let start = Local.with_ymd_and_hms(2024, 5, 5, 9, 0, 0).unwrap();
        let clock = Rc::new(ManualClock::new(start));
        (TaskStore::new(Vec::new(), clock.clone()), clock)
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let (mut store, _) = create_test_store();

        assert_eq!(store.add_task("", "Math"), Err(TaskError::ValidationRejected));
        assert_eq!(store.add_task("Read", ""), Err(TaskError::ValidationRejected));
        assert_eq!(store.add_task("   ", "  "), Err(TaskError::ValidationRejected));
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_task_normalizes() {
        let (mut store, clock) = create_test_store();

        let intent = store.add_task("Read ch.3", "math").unwrap();
        let task = &store.tasks()[0];

        assert_eq!(task.text, "Read ch.3");
        assert_eq!(task.subject, "MATH");
        assert!(!task.completed);
        assert_eq!(task.created_at, clock.now());
        assert_eq!(intent.tasks(), store.tasks());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let (mut store, clock) = create_test_store();

        // Same millisecond
        let _ = store.add_task("One", "a").unwrap();
        let _ = store.add_task("Two", "a").unwrap();
        clock.advance(Duration::seconds(1));
        let _ = store.add_task("Three", "a").unwrap();

        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids[2], clock.now().timestamp_millis());
    }

    #[test]
    fn test_ids_continue_after_loaded_tasks() {
        let (_, clock) = create_test_store();
        let future = Task::new(i64::MAX / 2, "Later", "x", clock.now()).unwrap();
        let mut store = TaskStore::new(vec![future], clock.clone());

        let _ = store.add_task("Now", "x").unwrap();
        assert_eq!(store.tasks()[1].id, i64::MAX / 2 + 1);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let (mut store, _) = create_test_store();
        let _ = store.add_task("Read", "math").unwrap();
        let id = store.tasks()[0].id;

        assert!(store.toggle_task(id).is_some());
        assert!(store.get(id).unwrap().completed);
        assert!(store.toggle_task(id).is_some());
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let (mut store, _) = create_test_store();
        let _ = store.add_task("Read", "math").unwrap();
        let before = store.tasks().to_vec();

        assert_eq!(store.toggle_task(42), None);
        assert_eq!(store.delete_task(42), None);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_task() {
        let (mut store, clock) = create_test_store();
        let _ = store.add_task("Read", "math").unwrap();
        clock.advance(Duration::seconds(1));
        let _ = store.add_task("Write", "english").unwrap();
        let id = store.tasks()[0].id;

        let intent = store.delete_task(id).unwrap();
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "Write");
        assert_eq!(intent.tasks().len(), 1);
    }

    #[test]
    fn test_list_subjects() {
        let (mut store, _) = create_test_store();
        assert_eq!(store.list_subjects(), vec!["ALL"]);

        let _ = store.add_task("Essay", "english").unwrap();
        let _ = store.add_task("Algebra", "Math").unwrap();
        let _ = store.add_task("Poem", "ENGLISH").unwrap();

        assert_eq!(store.list_subjects(), vec!["ALL", "ENGLISH", "MATH"]);
    }

    #[test]
    fn test_filter_all_tracks_every_mutation() {
        let (mut store, clock) = create_test_store();

        for (i, subject) in ["math", "chem", "math", "bio", "chem"].iter().enumerate() {
            let _ = store.add_task(&format!("Task {}", i), subject).unwrap();
            clock.advance(Duration::milliseconds(1));
        }
        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        let _ = store.toggle_task(ids[1]);
        let _ = store.delete_task(ids[3]);
        let _ = store.add_task("Late", "bio").unwrap();
        let _ = store.delete_task(ids[0]);

        let all: Vec<&Task> = store.filter_by_subject(ALL_SUBJECTS);
        let expected: Vec<&Task> = store.tasks().iter().collect();
        assert_eq!(all, expected);

        let subjects = store.list_subjects();
        assert_eq!(subjects[0], "ALL");
        let mut deduped = subjects.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), subjects.len());
    }

    #[test]
    fn test_filter_by_subject_preserves_order() {
        let (mut store, clock) = create_test_store();
        let _ = store.add_task("First", "math").unwrap();
        clock.advance(Duration::milliseconds(5));
        let _ = store.add_task("Other", "chem").unwrap();
        clock.advance(Duration::milliseconds(5));
        let _ = store.add_task("Second", "math").unwrap();

        let math: Vec<&str> = store
            .filter_by_subject("MATH")
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(math, vec!["First", "Second"]);
        assert!(store.filter_by_subject("HISTORY").is_empty());
    }

    #[test]
    fn test_add_after_max_id_finds_free_id() {
        let (_, clock) = create_test_store();
        let stored: Vec<Task> = serde_json::from_str(
            r#"[{"id":9223372036854775807,"text":"Imported","subject":"MATH","completed":false,"createdAt":"2024-05-05T09:00:00+00:00"}]"#,
        )
        .unwrap();
        let mut store = TaskStore::new(stored, clock.clone());

        let intent = store.add_task("Read", "math").unwrap();
        assert_eq!(intent.tasks().len(), 2);
        let _ = store.add_task("Write", "math").unwrap();

        let mut ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids[0], i64::MAX);
        assert_eq!(ids[1], clock.now().timestamp_millis());
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
