use crate::error::TaskError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A task tagged with a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Creation time in epoch milliseconds, unique within the store
    pub id: i64,
    /// Trimmed task text
    pub text: String,
    /// Trimmed, uppercased subject
    pub subject: String,
    #[serde(default)]
    pub completed: bool,
    /// When the task was created (never changes)
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Build a task from raw user input.
    ///
    /// Both fields are trimmed and the subject is uppercased. Blank input is
    /// rejected before a task ever exists.
    pub fn new(id: i64, text: &str, subject: &str, created_at: DateTime<Local>) -> Result<Self, TaskError> {
        let text = text.trim();
        let subject = subject.trim();

        if text.is_empty() || subject.is_empty() {
            return Err(TaskError::ValidationRejected);
        }

        Ok(Self {
            id,
            text: text.to_string(),
            subject: subject.to_uppercase(),
            completed: false,
            created_at,
        })
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Whether a loaded task still satisfies the non-blank invariant
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && !self.subject.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_normalizes_input() {
        let task = Task::new(1, "  Read ch.3 ", " math ", Local::now()).unwrap();
        assert_eq!(task.text, "Read ch.3");
        assert_eq!(task.subject, "MATH");
        assert!(!task.completed);
    }

    #[test]
    fn test_new_task_rejects_blank_fields() {
        assert_eq!(
            Task::new(1, "", "Math", Local::now()),
            Err(TaskError::ValidationRejected)
        );
        assert_eq!(
            Task::new(1, "Read", "   ", Local::now()),
            Err(TaskError::ValidationRejected)
        );
    }

    #[test]
    fn test_toggle() {
        let mut task = Task::new(1, "Read", "Math", Local::now()).unwrap();
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_json_field_names() {
        let task = Task::new(1_700_000_000_000, "Read", "Math", Local::now()).unwrap();
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], 1_700_000_000_000i64);
        assert_eq!(json["subject"], "MATH");
        assert_eq!(json["completed"], false);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_deserialize_browser_payload() {
        // Shape written by the web version of the widget
        let json = r#"{"id":1714900000000,"text":"Essay","subject":"ENGLISH","completed":true,"createdAt":"2024-05-05T09:06:40.000Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, 1_714_900_000_000);
        assert!(task.completed);
        assert_eq!(task.created_at.timestamp_millis(), 1_714_900_000_000);
    }
}
