pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod time_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::{render_filter_bar, render_list_pane};
use modal::render_session_modal;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use styles::error_style;
use time_pane::{render_nav_bar, render_time_pane};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_nav_bar(f, app, layout.nav_area);
    render_time_pane(f, app, layout.time_area);
    render_filter_bar(f, app, layout.filter_area);
    render_list_pane(f, app, layout.tasks_area);
    render_status_line(f, app, layout.status_area);

    // Session notice takes precedence over the form
    if app.ui_mode == UiMode::SessionComplete {
        render_session_modal(f, app, size);
        return;
    }

    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}

/// Storage problems surface here; in-memory state stays authoritative
fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = &app.status_message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            error_style(),
        )));
        f.render_widget(paragraph, area);
    }
}
