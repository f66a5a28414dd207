pub mod enums;
pub mod task;
pub mod views;

pub use enums::{TimerMode, UiMode, ViewMode};
pub use task::Task;
pub use views::{
    completion_glyph, filter_tasks, format_clock_date, format_clock_time, format_countdown,
    unique_subjects, ALL_SUBJECTS,
};
