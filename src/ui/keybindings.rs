use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" 1-4 mode   "),
        Span::raw("Space start/pause   "),
        Span::raw("r reset   "),
        Span::raw("a add   "),
        Span::raw("↑/↓ select   "),
        Span::raw("Enter done   "),
        Span::raw("d delete   "),
        Span::raw("←/→ subject   "),
        Span::raw("v view   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
