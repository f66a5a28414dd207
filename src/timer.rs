//! Countdown state machine behind the FOCUS / SHORT BREAK / LONG BREAK modes.
//!
//! The engine knows nothing about wall-clock time: the event loop owns a
//! one-second schedule and calls [`TimerEngine::tick`] each time it fires.

use crate::domain::{format_countdown, TimerMode};
use tracing::{debug, info};

/// Countdown length per mode, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDurations {
    pub focus: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for ModeDurations {
    fn default() -> Self {
        Self {
            focus: 25 * 60,
            short_break: 5 * 60,
            long_break: 15 * 60,
        }
    }
}

impl ModeDurations {
    pub fn from_minutes(focus: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            focus: focus * 60,
            short_break: short_break * 60,
            long_break: long_break * 60,
        }
    }

    /// Full duration for `mode`. CLOCK never counts down and mirrors FOCUS.
    pub fn seconds(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus | TimerMode::Clock => self.focus,
            TimerMode::ShortBreak => self.short_break,
            TimerMode::LongBreak => self.long_break,
        }
    }
}

/// Emitted by [`TimerEngine::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A countdown reached zero in the given mode
    SessionCompleted(TimerMode),
}

impl TimerEvent {
    /// Message handed to the notification sink
    pub fn message(&self) -> String {
        match self {
            Self::SessionCompleted(mode) => format!("{} session completed!", mode.label()),
        }
    }
}

/// Mode, remaining countdown and running flag
#[derive(Debug, Clone)]
pub struct TimerEngine {
    mode: TimerMode,
    remaining_seconds: u32,
    running: bool,
    durations: ModeDurations,
}

impl TimerEngine {
    /// Start in CLOCK mode, idle
    pub fn new(durations: ModeDurations) -> Self {
        Self {
            mode: TimerMode::Clock,
            remaining_seconds: durations.seconds(TimerMode::Clock),
            running: false,
            durations,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    #[cfg(test)]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Full duration of the current mode
    pub fn mode_duration(&self) -> u32 {
        self.durations.seconds(self.mode)
    }

    /// Switch mode, stopping any countdown and restoring the full duration.
    /// Re-selecting the current mode resets it too.
    pub fn set_mode(&mut self, mode: TimerMode) {
        debug!(from = self.mode.label(), to = mode.label(), "timer mode change");
        self.mode = mode;
        self.remaining_seconds = self.durations.seconds(mode);
        self.running = false;
    }

    /// Begin counting down. Returns true if the engine moved to running.
    pub fn start(&mut self) -> bool {
        if self.running || !self.mode.is_countdown() {
            return false;
        }

        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.mode_duration();
        }
        self.running = true;
        debug!(mode = self.mode.label(), remaining = self.remaining_seconds, "timer started");
        true
    }

    /// Stop counting down. Returns true if the engine was running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.running = false;
        debug!(mode = self.mode.label(), remaining = self.remaining_seconds, "timer paused");
        true
    }

    /// Restore the full duration of the current mode and stop counting
    pub fn reset(&mut self) {
        self.set_mode(self.mode);
    }

    /// Advance the countdown by one second.
    ///
    /// The tick that reaches zero stops the engine and reports completion; ticks
    /// while stopped do nothing, so completion fires once per countdown.
    /// Completion lands on the 1 -> 0 tick itself, not on a later tick that
    /// finds the display already at 00:00.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        self.running = false;
        info!(mode = self.mode.label(), "session completed");
        Some(TimerEvent::SessionCompleted(self.mode))
    }

    /// Remaining time as "MM:SS"
    pub fn display(&self) -> String {
        format_countdown(self.remaining_seconds)
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(ModeDurations::default())
    }
}
