use crate::domain::TimerUrgency;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Task title style
pub fn task_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Task description style
pub fn description_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Empty-state prompt style
pub fn empty_state_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Timer display style for a normal amount of time left
pub fn timer_normal_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Timer display style for under a minute left
pub fn timer_warning_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Timer display style for an expired countdown
pub fn timer_expired_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Map urgency to its timer display style
pub fn urgency_style(urgency: TimerUrgency) -> Style {
    match urgency {
        TimerUrgency::Normal => timer_normal_style(),
        TimerUrgency::Warning => timer_warning_style(),
        TimerUrgency::Expired => timer_expired_style(),
    }
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Completion timestamp style
pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_styles_are_distinct() {
        let normal = urgency_style(TimerUrgency::Normal);
        let warning = urgency_style(TimerUrgency::Warning);
        let expired = urgency_style(TimerUrgency::Expired);

        assert_eq!(normal.fg, Some(Color::Green));
        assert_eq!(warning.fg, Some(Color::Yellow));
        assert_eq!(expired.fg, Some(Color::Red));
    }
}
