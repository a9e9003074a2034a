use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub focus_area: Rect,
    pub history_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Focus area: current task (or empty state) with the timer
/// - Bottom: completed-task pane, only when there is history to show
pub fn create_layout(area: Rect, show_history: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];

    if show_history {
        let vertical_split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),     // Focus pane
                Constraint::Length(14), // History pane (10 rows + chrome)
            ])
            .split(content_area);

        MainLayout {
            keybindings_area,
            focus_area: vertical_split[0],
            history_area: Some(vertical_split[1]),
        }
    } else {
        MainLayout {
            keybindings_area,
            focus_area: content_area,
            history_area: None,
        }
    }
}

/// Create the centered modal area for the add-task form
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(18),
            Constraint::Percentage(20),
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
