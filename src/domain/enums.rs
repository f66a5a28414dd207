use serde::{Deserialize, Serialize};

/// Timer mode selected from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerMode {
    /// Wall clock only, no countdown
    Clock,
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// Display label, as shown in the navigation bar and notifications
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clock => "CLOCK",
            Self::Focus => "FOCUS",
            Self::ShortBreak => "SHORT BREAK",
            Self::LongBreak => "LONG BREAK",
        }
    }

    /// Parse a mode from its label (accepts `SHORT_BREAK` and `short break` alike)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().replace('_', " ").as_str() {
            "CLOCK" => Some(Self::Clock),
            "FOCUS" => Some(Self::Focus),
            "SHORT BREAK" => Some(Self::ShortBreak),
            "LONG BREAK" => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// Whether this mode runs a countdown
    pub fn is_countdown(&self) -> bool {
        !matches!(self, Self::Clock)
    }

    /// All modes in navigation order
    pub fn all() -> &'static [TimerMode] {
        &[
            TimerMode::Clock,
            TimerMode::Focus,
            TimerMode::ShortBreak,
            TimerMode::LongBreak,
        ]
    }
}

/// How the task list is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    SessionComplete, // Blocking notice shown when a countdown finishes
}
