use crate::domain::{
    project, CompletedTask, Task, Tick, TimerEngine, UiMode, ViewModel,
};
use crate::notifications::Notifier;
use crate::persistence::Store;
use anyhow::Result;
use chrono::Local;
use std::time::{Duration, Instant};

/// Which field of the add-task form is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Hours,
    Minutes,
    Seconds,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Hours,
            Self::Hours => Self::Minutes,
            Self::Minutes => Self::Seconds,
            Self::Seconds => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Seconds,
            Self::Description => Self::Title,
            Self::Hours => Self::Description,
            Self::Minutes => Self::Hours,
            Self::Seconds => Self::Minutes,
        }
    }

    /// Numeric fields only accept digits
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Hours | Self::Minutes | Self::Seconds)
    }
}

/// Input form state for adding a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub description: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub field: FormField,
}

impl InputFormState {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            hours: String::new(),
            minutes: String::new(),
            seconds: String::new(),
            field: FormField::Title,
        }
    }

    /// Mutable access to the value of the field currently being edited
    pub fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Hours => &mut self.hours,
            FormField::Minutes => &mut self.minutes,
            FormField::Seconds => &mut self.seconds,
        }
    }
}

/// Coerce a raw numeric field to seconds; unparseable input counts as 0
fn parse_component(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// Main application state: the single current task, the completed-task
/// history, and the countdown engine. Every mutation persists before it
/// returns (write-through, no batching).
pub struct AppState {
    pub current: Option<Task>,
    pub completed: Vec<CompletedTask>,
    pub timer: TimerEngine,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub last_tick: Instant,
    store: Store,
    notifier: Box<dyn Notifier>,
}

impl AppState {
    /// Load persisted state (with the documented corrupt-data fallbacks)
    /// and build the app
    pub fn new(store: Store, notifier: Box<dyn Notifier>) -> Self {
        let current = store.load_current_or_default();
        let completed = store.load_completed_or_default();

        let timer = match &current {
            Some(task) => TimerEngine::load(task.timer_seconds),
            None => TimerEngine::idle(),
        };

        Self {
            current,
            completed,
            timer,
            ui_mode: UiMode::Normal,
            input_form: None,
            last_tick: Instant::now(),
            store,
            notifier,
        }
    }

    /// Project current state for rendering
    pub fn view_model(&self) -> ViewModel {
        project(self.current.as_ref(), &self.timer, &self.completed)
    }

    /// Open the add-task form; ignored while a task is in progress
    pub fn start_add_task(&mut self) {
        if self.current.is_none() {
            self.input_form = Some(InputFormState::new());
            self.ui_mode = UiMode::AddingTask;
        }
    }

    /// Close the add-task form without creating anything
    pub fn cancel_add_task(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Submit the add-task form. Title and description are trimmed; the
    /// numeric fields default to 0 when unparseable.
    pub fn submit_add_task(&mut self) -> Result<()> {
        let Some(form) = self.input_form.take() else {
            return Ok(());
        };
        self.ui_mode = UiMode::Normal;

        self.add_task(
            form.title.trim().to_string(),
            form.description.trim().to_string(),
            parse_component(&form.hours),
            parse_component(&form.minutes),
            parse_component(&form.seconds),
        )
    }

    /// Create the current task. A no-op if one already exists; an empty
    /// title is accepted (the boundary trims, it does not validate).
    pub fn add_task(
        &mut self,
        title: String,
        description: String,
        hours: u64,
        minutes: u64,
        seconds: u64,
    ) -> Result<()> {
        if self.current.is_some() {
            return Ok(());
        }

        let total = hours * 3600 + minutes * 60 + seconds;
        let task = Task::new(title, description, total);

        self.timer = TimerEngine::load(total);
        self.store.save_current(Some(&task))?;
        self.current = Some(task);
        Ok(())
    }

    /// Move the current task (if any) to the history and clear the slot.
    /// The timer pause and the slot clear happen unconditionally.
    pub fn complete_task(&mut self) -> Result<()> {
        self.timer.pause();

        if let Some(task) = self.current.take() {
            self.completed.push(task.into_completed(Local::now()));
            self.store.save_completed(&self.completed)?;
        }

        self.timer = TimerEngine::idle();
        self.store.save_current(None)?;
        Ok(())
    }

    /// Wipe the completed-task history
    pub fn clear_completed(&mut self) -> Result<()> {
        self.completed.clear();
        self.store.save_completed(&self.completed)
    }

    /// Start the countdown; only meaningful for a timed current task
    pub fn start_timer(&mut self) {
        if self.current.as_ref().map_or(false, Task::has_timer) {
            self.timer.start();
        }
    }

    /// Pause the countdown; idempotent
    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    /// Pause and restore the countdown to the task's original duration
    pub fn reset_timer(&mut self) -> Result<()> {
        match self.current.as_ref().map(|t| t.original_timer) {
            Some(original) => {
                self.timer.reset(original);
                self.persist_timer()
            }
            None => {
                self.timer.pause();
                Ok(())
            }
        }
    }

    /// Advance the countdown by whole elapsed wall-clock seconds. Called
    /// every event-loop pass; sub-second passes do nothing.
    pub fn tick(&mut self) -> Result<()> {
        let whole = self.last_tick.elapsed().as_secs();
        if whole == 0 {
            return Ok(());
        }
        self.last_tick += Duration::from_secs(whole);

        for _ in 0..whole {
            self.advance_second()?;
        }
        Ok(())
    }

    /// One countdown step: decrement, persist, and alert on expiry
    pub fn advance_second(&mut self) -> Result<()> {
        match self.timer.advance_second() {
            Tick::NoChange => Ok(()),
            Tick::Advanced => self.persist_timer(),
            Tick::Expired => {
                self.persist_timer()?;
                self.notifier.notify("MonoTask", "Time is up!");
                Ok(())
            }
        }
    }

    /// Write the engine's remaining seconds through to the stored task
    fn persist_timer(&mut self) -> Result<()> {
        if let Some(task) = self.current.as_mut() {
            task.timer_seconds = self.timer.seconds;
            self.store.save_current(Some(task))?;
        }
        Ok(())
    }
}
