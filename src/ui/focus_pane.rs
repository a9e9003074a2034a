use crate::domain::FocusView;
use crate::ui::styles::{
    border_style, description_style, empty_state_style, task_title_style, title_style,
    urgency_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the focus pane: the current task with its timer, or the
/// empty-state prompt when nothing is in progress
pub fn render_focus_pane(f: &mut Frame, focus: &FocusView, area: Rect) {
    let mut lines = Vec::new();

    match focus {
        FocusView::Empty => {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "No task in progress",
                empty_state_style(),
            )));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "Press 'a' to add the one thing to focus on",
                empty_state_style(),
            )));
        }
        FocusView::Task {
            title,
            description,
            timer,
        } => {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(title.clone(), task_title_style())));

            if let Some(description) = description {
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    description.clone(),
                    description_style(),
                )));
            }

            if let Some(timer) = timer {
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    timer.text.clone(),
                    urgency_style(timer.urgency),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" MonoTask ", title_style())),
        );

    f.render_widget(paragraph, area);
}
