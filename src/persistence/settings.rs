use crate::domain::ViewMode;
use crate::error::SettingsError;
use crate::timer::ModeDurations;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Longest countdown accepted from settings.json
pub const MAX_MODE_MINUTES: u32 = 240;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    /// Show the wall clock as 13:05 instead of 1:05PM
    pub clock_24h: bool,
    pub view_mode: ViewMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            clock_24h: false,
            view_mode: ViewMode::List,
        }
    }
}

impl Settings {
    /// Check every countdown length is within 1..=MAX_MODE_MINUTES
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("focus_minutes", self.focus_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
        ];

        for (field, value) in fields {
            if value == 0 || value > MAX_MODE_MINUTES {
                return Err(SettingsError::Invalid {
                    field,
                    value,
                    max: MAX_MODE_MINUTES,
                });
            }
        }

        Ok(())
    }

    pub fn durations(&self) -> ModeDurations {
        ModeDurations::from_minutes(
            self.focus_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
    }
}

/// Load settings from settings.json, falling back to defaults when the file is
/// missing, corrupt, or out of range
pub fn load_settings<P: AsRef<Path>>(path: P) -> Settings {
    let path = path.as_ref();

    if !path.exists() {
        return Settings::default();
    }

    let settings: Settings = match std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| serde_json::from_str::<Settings>(&content).map_err(anyhow::Error::from))
    {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            return Settings::default();
        }
    };

    if let Err(e) = settings.validate() {
        warn!(error = %e, "ignoring invalid settings");
        return Settings::default();
    }

    settings
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
