use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The single in-progress task.
///
/// Field names in the persisted JSON match the original storage format
/// (`timerSeconds` / `originalTimer`), hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task title
    pub title: String,
    /// Optional description (empty string means none)
    pub description: String,
    /// Remaining countdown in seconds
    pub timer_seconds: u64,
    /// Countdown duration at creation, used for reset
    pub original_timer: u64,
}

impl Task {
    pub fn new(title: String, description: String, total_seconds: u64) -> Self {
        Self {
            title,
            description,
            timer_seconds: total_seconds,
            original_timer: total_seconds,
        }
    }

    /// Whether this task has a countdown at all
    pub fn has_timer(&self) -> bool {
        self.original_timer > 0
    }

    /// Strip the timer state and stamp the completion time
    pub fn into_completed(self, completed_at: DateTime<Local>) -> CompletedTask {
        CompletedTask {
            title: self.title,
            description: self.description,
            completed_at,
        }
    }
}

/// A historical record of a finished task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub title: String,
    pub description: String,
    /// When the task was completed (ISO-8601 in storage)
    pub completed_at: DateTime<Local>,
}
