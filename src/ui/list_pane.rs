use crate::app::AppState;
use crate::domain::{completion_glyph, Task, ViewMode};
use crate::ui::styles::{
    active_style, border_style, default_style, done_style, hint_style, selected_style,
    subject_style, title_style,
};
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

/// Number of columns in grid view
const GRID_COLUMNS: usize = 3;

/// Render the FILTER BY SUBJECT chips
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();
    for subject in app.tasks.list_subjects() {
        let style = if subject == app.selected_subject {
            active_style()
        } else {
            subject_style()
        };
        spans.push(Span::styled(format!(" {} ", subject), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" FILTER BY SUBJECT ", title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Create a single line for a task
/// Format: ○ [MATH] Read ch.3
pub fn create_task_line(task: &Task) -> Line<'static> {
    let text_style = if task.completed {
        done_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::raw(format!("{} ", completion_glyph(task))),
        Span::styled(format!("[{}] ", task.subject), subject_style()),
        Span::styled(task.text.clone(), text_style),
    ])
}

/// Render the task list in list or grid layout
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.visible_tasks();
    let view_label = match app.view_mode {
        ViewMode::List => "☰ list",
        ViewMode::Grid => "⊞ grid",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Tasks ({}) · {} ", tasks.len(), view_label),
            title_style(),
        ));

    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Add one above!",
            hint_style(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    match app.view_mode {
        ViewMode::List => {
            let items: Vec<ListItem> = tasks
                .iter()
                .enumerate()
                .map(|(idx, task)| {
                    let style = if idx == app.selected_index {
                        selected_style()
                    } else {
                        default_style()
                    };
                    ListItem::new(create_task_line(task)).style(style)
                })
                .collect();

            f.render_widget(List::new(items).block(block), area);
        }
        ViewMode::Grid => {
            let rows: Vec<Row> = tasks
                .chunks(GRID_COLUMNS)
                .enumerate()
                .map(|(row_idx, chunk)| {
                    let cells: Vec<Cell> = chunk
                        .iter()
                        .enumerate()
                        .map(|(col_idx, task)| {
                            let cell = Cell::from(create_task_line(task));
                            if row_idx * GRID_COLUMNS + col_idx == app.selected_index {
                                cell.style(selected_style())
                            } else {
                                cell
                            }
                        })
                        .collect();
                    Row::new(cells).height(2)
                })
                .collect();

            let widths = [Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS];
            f.render_widget(Table::new(rows, widths).block(block), area);
        }
    }
}
