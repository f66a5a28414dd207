use super::task::Task;
use chrono::{DateTime, Local};

/// Filter entry that matches every subject
pub const ALL_SUBJECTS: &str = "ALL";

/// `ALL` followed by each distinct subject in first-seen order
pub fn unique_subjects(tasks: &[Task]) -> Vec<String> {
    let mut subjects = vec![ALL_SUBJECTS.to_string()];

    for task in tasks {
        if !subjects.iter().any(|s| *s == task.subject) {
            subjects.push(task.subject.clone());
        }
    }

    subjects
}

/// Tasks matching `subject`, in insertion order
pub fn filter_tasks<'a>(tasks: &'a [Task], subject: &str) -> Vec<&'a Task> {
    if subject == ALL_SUBJECTS {
        return tasks.iter().collect();
    }

    tasks.iter().filter(|t| t.subject == subject).collect()
}

/// Format a countdown as zero-padded "MM:SS"
pub fn format_countdown(remaining_seconds: u32) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

/// Format wall-clock time, e.g. "9:05AM" or "09:05"
pub fn format_clock_time(now: DateTime<Local>, use_24h: bool) -> String {
    if use_24h {
        now.format("%H:%M").to_string()
    } else {
        now.format("%-I:%M%p").to_string()
    }
}

/// Format the date under the clock, e.g. "MAY 5, 2024"
pub fn format_clock_date(now: DateTime<Local>) -> String {
    now.format("%B %-d, %Y").to_string().to_uppercase()
}

/// Status glyph for a task row
pub fn completion_glyph(task: &Task) -> &'static str {
    if task.completed {
        "✓"
    } else {
        "○"
    }
}
