use crate::domain::HistoryRow;
use crate::ui::styles::{border_style, default_style, done_style, timestamp_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Create a line for one completed task
fn create_history_line(row: &HistoryRow) -> Line {
    let mut spans = vec![
        Span::styled("✓ ".to_string(), done_style()),
        Span::styled(row.title.clone(), default_style()),
    ];

    if !row.description.is_empty() {
        spans.push(Span::styled(
            format!("  — {}", row.description),
            timestamp_style(),
        ));
    }

    spans.push(Span::styled(
        format!("  ({})", row.completed_at),
        timestamp_style(),
    ));

    Line::from(spans)
}

/// Render the completed-task pane: the most recent entries first, the
/// total count in the title
pub fn render_history_pane(f: &mut Frame, rows: &[HistoryRow], total: usize, area: Rect) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(create_history_line(row)))
        .collect();

    let title = if total > rows.len() {
        format!(" Completed ({}, showing {}) ", total, rows.len())
    } else {
        format!(" Completed ({}) ", total)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
