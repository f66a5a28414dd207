use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub nav_area: Rect,
    pub time_area: Rect,
    pub filter_area: Rect,
    pub tasks_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout, top to bottom:
/// keybindings bar, mode navigation, time display, subject filter, tasks, status line
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Mode navigation
            Constraint::Length(7), // Clock / countdown
            Constraint::Length(3), // Subject filter
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Status line
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        nav_area: chunks[1],
        time_area: chunks[2],
        filter_area: chunks[3],
        tasks_area: chunks[4],
        status_area: chunks[5],
    }
}

/// Create centered modal area with a fixed height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
