use crate::app::AppState;
use crate::domain::{format_clock_date, format_clock_time, TimerMode};
use crate::ui::styles::{
    active_style, border_style, clock_style, default_style, hint_style, paused_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the CLOCK / FOCUS / SHORT BREAK / LONG BREAK navigation
pub fn render_nav_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<Line> = TimerMode::all()
        .iter()
        .map(|mode| Line::from(format!(" {} ", mode.label())))
        .collect();
    let selected = TimerMode::all()
        .iter()
        .position(|mode| *mode == app.timer.mode())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(default_style())
        .highlight_style(active_style())
        .divider("│")
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));

    f.render_widget(tabs, area);
}

/// Lines for the time display: wall clock in CLOCK mode, countdown otherwise
pub fn time_lines(app: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("")];

    if app.timer.mode() == TimerMode::Clock {
        lines.push(Line::from(Span::styled(
            format_clock_time(app.current_time, app.settings.clock_24h),
            clock_style(),
        )));
        lines.push(Line::from(Span::styled(
            format_clock_date(app.current_time),
            title_style(),
        )));
        return lines;
    }

    let (status, status_style, action) = if app.timer.is_running() {
        ("RUNNING", running_style(), "[Space] PAUSE")
    } else {
        ("PAUSED", paused_style(), "[Space] START")
    };

    lines.push(Line::from(Span::styled(app.timer.display(), clock_style())));
    lines.push(Line::from(vec![
        Span::styled(app.timer.mode().label(), title_style()),
        Span::raw("  "),
        Span::styled(status, status_style),
    ]));
    lines.push(Line::from(Span::styled(
        format!("{}   [r] RESET", action),
        hint_style(),
    )));

    lines
}

/// Render the clock / countdown pane
pub fn render_time_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(time_lines(app))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));

    f.render_widget(paragraph, area);
}
