use crate::app::AppState;
use crate::domain::{TimerMode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::SessionComplete => handle_session_complete_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Mode navigation
        KeyCode::Char('1') | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.set_mode(TimerMode::Clock);
            Ok(false)
        }
        KeyCode::Char('2') | KeyCode::Char('f') | KeyCode::Char('F') => {
            app.set_mode(TimerMode::Focus);
            Ok(false)
        }
        KeyCode::Char('3') | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.set_mode(TimerMode::ShortBreak);
            Ok(false)
        }
        KeyCode::Char('4') | KeyCode::Char('l') | KeyCode::Char('L') => {
            app.set_mode(TimerMode::LongBreak);
            Ok(false)
        }

        // Timer controls
        KeyCode::Char(' ') => {
            app.toggle_timer(Instant::now());
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }

        // Task list navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Subject filter
        KeyCode::Left => {
            app.previous_subject();
            Ok(false)
        }
        KeyCode::Right => {
            app.next_subject();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => {
            app.toggle_selected();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // List / grid
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.toggle_view_mode();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the session-complete notice is up (blocks everything else)
fn handle_session_complete_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.dismiss_modal();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys in input form mode
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Switch between task and subject
        KeyCode::Tab | KeyCode::BackTab => {
            app.input_form_toggle_field();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::notifications::RecordingNotifier;
    use crate::persistence::storage::MemoryStorage;
    use crate::persistence::Settings;
    use crossterm::event::KeyModifiers;
    use std::rc::Rc;

    fn create_test_app() -> AppState {
        AppState::new(
            Box::new(MemoryStorage::default()),
            Box::new(RecordingNotifier::default()),
            Rc::new(SystemClock),
            Settings::default(),
            Instant::now(),
        )
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_mode_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.timer.mode(), TimerMode::Focus);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.timer.mode(), TimerMode::ShortBreak);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.timer.mode(), TimerMode::LongBreak);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.timer.mode(), TimerMode::Clock);
    }

    #[test]
    fn test_space_starts_and_pauses() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.timer.is_running());
        assert!(app.has_live_countdown());

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.timer.is_running());
        assert!(!app.has_live_countdown());
    }

    #[test]
    fn test_add_task_via_form() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // Letters go into the form, not to mode switching
        type_str(&mut app, "Read ch.3");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "science");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.mode(), TimerMode::Clock);
        assert_eq!(app.tasks.tasks()[0].text, "Read ch.3");
        assert_eq!(app.tasks.tasks()[0].subject, "SCIENCE");
    }

    #[test]
    fn test_toggle_and_delete_keys() {
        let mut app = create_test_app();
        app.add_task("Read", "math");

        press(&mut app, KeyCode::Enter);
        assert!(app.tasks.tasks()[0].completed);

        press(&mut app, KeyCode::Delete);
        assert!(app.tasks.tasks().is_empty());
    }

    #[test]
    fn test_modal_blocks_other_keys() {
        let mut app = create_test_app();
        app.modal = Some("FOCUS session completed!".to_string());
        app.ui_mode = UiMode::SessionComplete;

        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.timer.mode(), TimerMode::Clock);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
