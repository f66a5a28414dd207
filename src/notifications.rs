//! Notification sink for finished sessions.
//! The in-app modal is handled by the app; this covers anything outside the terminal.

#[cfg(target_os = "macos")]
use std::process::Command;

/// Receives user-facing notifications
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Desktop notifications (macOS only, no-op elsewhere)
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&mut self, message: &str) {
        #[cfg(target_os = "macos")]
        {
            let script = format!(
                r#"display notification "{}" with title "Taskmaster" sound name "Glass""#,
                message.replace('"', "\\\"")
            );

            if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
                tracing::debug!(error = %e, "desktop notification failed");
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            let _ = message;
        }
    }
}

/// Records messages for assertions
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub messages: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
