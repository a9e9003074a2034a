/// Runtime state of the countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Color urgency of the remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUrgency {
    Normal,
    Warning,
    Expired,
}

impl TimerUrgency {
    /// Derive urgency from remaining seconds: 0 is expired, under a
    /// minute is a warning, anything else is normal.
    pub fn for_seconds(seconds: u64) -> Self {
        if seconds == 0 {
            Self::Expired
        } else if seconds < 60 {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}
