use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the blocking session-complete notice
pub fn render_session_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = &app.modal {
        let modal_area = create_modal_area(area, 8);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(message.clone(), modal_title_style())),
            Line::raw(""),
            Line::raw("Pick the next mode when you're ready."),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[Enter]", modal_title_style()),
                Span::raw(" OK"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⏰ Time's up ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
