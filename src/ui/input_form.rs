use crate::app::{AppState, InputFormState};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Label plus "> value█" for one field
fn field_lines<'a>(label: &'a str, value: &'a str, editing: bool) -> [Line<'a>; 2] {
    let label_line = if editing {
        Line::raw(format!("{}: (editing)", label))
    } else {
        Line::raw(format!("{}:", label))
    };

    let value_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    [label_line, value_line]
}

/// Lines of the add-task form
pub fn form_lines(form: &InputFormState) -> Vec<Line<'_>> {
    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines("ENTER A TASK", &form.text, form.editing_field == 0));
    lines.push(Line::raw(""));
    lines.extend(field_lines("SUBJECT", &form.subject, form.editing_field == 1));
    lines.push(Line::raw(""));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to cancel"));
    lines
}

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area, 10);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let paragraph = Paragraph::new(form_lines(form))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
