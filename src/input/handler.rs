use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Add task (opens the form only when no task is in progress)
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Timer controls
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_timer();
            Ok(false)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.pause_timer();
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer()?;
            Ok(false)
        }

        // Complete the current task
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.complete_task()?;
            Ok(false)
        }

        // Clear the completed-task history
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.clear_completed()?;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add-task form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_add_task();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_add_task()?;
            Ok(false)
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.input_form.as_mut() {
                form.field = form.field.next();
            }
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.input_form.as_mut() {
                form.field = form.field.prev();
            }
            Ok(false)
        }
        KeyCode::Backspace => {
            if let Some(form) = app.input_form.as_mut() {
                form.active_value_mut().pop();
            }
            Ok(false)
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.input_form.as_mut() {
                // Numeric fields take digits only, capped at 3 places
                if form.field.is_numeric() {
                    if c.is_ascii_digit() && form.active_value_mut().len() < 3 {
                        form.active_value_mut().push(c);
                    }
                } else {
                    form.active_value_mut().push(c);
                }
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormField;
    use crate::notifications::NoopNotifier;
    use crate::persistence::Store;
    use crossterm::event::KeyModifiers;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        let app = AppState::new(store, Box::new(NoopNotifier));
        (dir, app)
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let (_dir, mut app) = test_app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let (_dir, mut app) = test_app();
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_add_task_through_the_form() {
        let (_dir, mut app) = test_app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        type_str(&mut app, "Write report");
        press(&mut app, KeyCode::Tab); // description
        press(&mut app, KeyCode::Tab); // hours
        press(&mut app, KeyCode::Tab); // minutes
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Tab); // seconds
        type_str(&mut app, "30");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        let task = app.current.as_ref().unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.original_timer, 90);
    }

    #[test]
    fn test_numeric_fields_reject_non_digits() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('a'));

        app.input_form.as_mut().unwrap().field = FormField::Minutes;
        type_str(&mut app, "a1b2");
        assert_eq!(app.input_form.as_ref().unwrap().minutes, "12");

        // Capped at three digits
        type_str(&mut app, "345");
        assert_eq!(app.input_form.as_ref().unwrap().minutes, "123");
    }

    #[test]
    fn test_esc_cancels_the_form() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "half-typed");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert!(app.current.is_none());
    }

    #[test]
    fn test_backtab_cycles_backwards() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.input_form.as_ref().unwrap().field, FormField::Seconds);
    }

    #[test]
    fn test_timer_keys_drive_the_engine() {
        use crate::domain::TimerState;

        let (_dir, mut app) = test_app();
        app.add_task("T".to_string(), String::new(), 0, 0, 10)
            .unwrap();

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.timer.state, TimerState::Running);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.timer.state, TimerState::Paused);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.timer.seconds, 10);
    }

    #[test]
    fn test_complete_and_clear_keys() {
        let (_dir, mut app) = test_app();
        app.add_task("T".to_string(), String::new(), 0, 0, 0)
            .unwrap();

        press(&mut app, KeyCode::Char('d'));
        assert!(app.current.is_none());
        assert_eq!(app.completed.len(), 1);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.completed.is_empty());
    }
}
