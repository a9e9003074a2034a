use crate::app::{AppState, FormField};
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

/// One labelled field row with a block cursor on the active field
fn field_lines<'a>(label: &'a str, value: &'a str, active: bool) -> Vec<Line<'a>> {
    let label_line = if active {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label)
    };

    let value_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if active {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    vec![label_line, value_line, Line::raw("")]
}

/// Render the modal add-task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw("")];
        lines.extend(field_lines(
            "Title:",
            &form.title,
            form.field == FormField::Title,
        ));
        lines.extend(field_lines(
            "Description:",
            &form.description,
            form.field == FormField::Description,
        ));
        lines.extend(field_lines(
            "Hours:",
            &form.hours,
            form.field == FormField::Hours,
        ));
        lines.extend(field_lines(
            "Minutes:",
            &form.minutes,
            form.field == FormField::Minutes,
        ));
        lines.extend(field_lines(
            "Seconds:",
            &form.seconds,
            form.field == FormField::Seconds,
        ));

        lines.push(Line::raw(
            "Tab to switch fields  ·  Enter to add  ·  Esc to cancel",
        ));

        let paragraph = Paragraph::new(lines)
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
