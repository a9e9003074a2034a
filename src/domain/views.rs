use super::enums::TimerUrgency;
use super::task::{CompletedTask, Task};
use super::timer::{format_hms, TimerEngine};

/// At most this many completed tasks are surfaced in the history pane.
/// A display policy only: storage retains the full history.
pub const MAX_HISTORY_ROWS: usize = 10;

/// Derived timer display: formatted text plus urgency color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    pub text: String,
    pub urgency: TimerUrgency,
}

/// What the focus area shows: the current task, or the empty state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusView {
    Empty,
    Task {
        title: String,
        /// None when the description is empty (the row is hidden)
        description: Option<String>,
        /// None when the task is untimed (timer and controls are hidden)
        timer: Option<TimerView>,
    },
}

/// One row of the completed-task history pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub title: String,
    pub description: String,
    /// Completion time formatted for display
    pub completed_at: String,
}

/// Everything the rendering layer needs, derived without side effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub focus: FocusView,
    /// Most recent first, capped at MAX_HISTORY_ROWS
    pub history: Vec<HistoryRow>,
    /// Total count in storage (shown in the pane title)
    pub history_total: usize,
    pub show_history: bool,
}

/// Project application state to a view model.
///
/// Pure function of its inputs so the display logic is testable without
/// a terminal.
pub fn project(
    current: Option<&Task>,
    timer: &TimerEngine,
    completed: &[CompletedTask],
) -> ViewModel {
    let focus = match current {
        None => FocusView::Empty,
        Some(task) => FocusView::Task {
            title: task.title.clone(),
            description: if task.description.is_empty() {
                None
            } else {
                Some(task.description.clone())
            },
            timer: if task.has_timer() {
                Some(TimerView {
                    text: format_hms(timer.seconds),
                    urgency: TimerUrgency::for_seconds(timer.seconds),
                })
            } else {
                None
            },
        },
    };

    let history: Vec<HistoryRow> = completed
        .iter()
        .rev()
        .take(MAX_HISTORY_ROWS)
        .map(|task| HistoryRow {
            title: task.title.clone(),
            description: task.description.clone(),
            completed_at: task.completed_at.format("%H:%M").to_string(),
        })
        .collect();

    ViewModel {
        focus,
        history_total: completed.len(),
        show_history: !completed.is_empty(),
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use pretty_assertions::assert_eq;

    fn completed(title: &str) -> CompletedTask {
        CompletedTask {
            title: title.to_string(),
            description: String::new(),
            completed_at: Local::now(),
        }
    }

    #[test]
    fn test_project_empty_state() {
        let vm = project(None, &TimerEngine::idle(), &[]);
        assert_eq!(vm.focus, FocusView::Empty);
        assert!(!vm.show_history);
        assert!(vm.history.is_empty());
    }

    #[test]
    fn test_project_timed_task() {
        let task = Task::new("Write report".to_string(), String::new(), 90);
        let timer = TimerEngine::load(45);
        let vm = project(Some(&task), &timer, &[]);

        match vm.focus {
            FocusView::Task {
                title,
                description,
                timer,
            } => {
                assert_eq!(title, "Write report");
                assert_eq!(description, None);
                let timer = timer.expect("timed task should show a timer");
                assert_eq!(timer.text, "00:00:45");
                assert_eq!(timer.urgency, TimerUrgency::Warning);
            }
            FocusView::Empty => panic!("expected a task view"),
        }
    }

    #[test]
    fn test_project_untimed_task_hides_timer() {
        let task = Task::new("Read".to_string(), "a book".to_string(), 0);
        let vm = project(Some(&task), &TimerEngine::idle(), &[]);

        match vm.focus {
            FocusView::Task {
                description, timer, ..
            } => {
                assert_eq!(description.as_deref(), Some("a book"));
                assert_eq!(timer, None);
            }
            FocusView::Empty => panic!("expected a task view"),
        }
    }

    #[test]
    fn test_history_caps_at_ten_most_recent_first() {
        let all: Vec<CompletedTask> = (1..=12).map(|i| completed(&format!("task {}", i))).collect();
        let vm = project(None, &TimerEngine::idle(), &all);

        assert!(vm.show_history);
        assert_eq!(vm.history_total, 12);
        assert_eq!(vm.history.len(), MAX_HISTORY_ROWS);
        assert_eq!(vm.history[0].title, "task 12");
        assert_eq!(vm.history[9].title, "task 3");
    }
}
