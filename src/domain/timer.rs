use super::enums::TimerState;

/// Outcome of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Timer was not running or had nothing left to count
    NoChange,
    /// One second consumed, time remains
    Advanced,
    /// The decrement reached exactly zero; the engine auto-paused
    Expired,
}

/// Countdown engine for the current task's timer.
///
/// All operations are total: redundant starts and pauses are no-ops.
/// The engine only counts; the wall-clock driving lives in the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEngine {
    /// Remaining seconds
    pub seconds: u64,
    pub state: TimerState,
}

impl TimerEngine {
    /// A fresh engine with nothing loaded
    pub fn idle() -> Self {
        Self {
            seconds: 0,
            state: TimerState::Idle,
        }
    }

    /// Load a countdown (used when a task is created or restored)
    pub fn load(seconds: u64) -> Self {
        Self {
            seconds,
            state: TimerState::Idle,
        }
    }

    /// Start the countdown; no-op if already running
    pub fn start(&mut self) {
        if self.state != TimerState::Running {
            self.state = TimerState::Running;
        }
    }

    /// Pause the countdown; idempotent
    pub fn pause(&mut self) {
        self.state = TimerState::Paused;
    }

    /// Pause and restore the countdown to its original duration
    pub fn reset(&mut self, original: u64) {
        self.pause();
        self.seconds = original;
    }

    /// Advance the countdown by one second of wall-clock time
    pub fn advance_second(&mut self) -> Tick {
        if self.state != TimerState::Running || self.seconds == 0 {
            return Tick::NoChange;
        }
        self.seconds -= 1;
        if self.seconds == 0 {
            self.pause();
            return Tick::Expired;
        }
        Tick::Advanced
    }
}

/// Format remaining seconds as zero-padded "HH:MM:SS"
pub fn format_hms(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(45), "00:00:45");
        assert_eq!(format_hms(90), "00:01:30");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(86399), "23:59:59");
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut engine = TimerEngine::load(10);
        engine.start();
        let after_once = engine;
        engine.start();
        assert_eq!(engine, after_once);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut engine = TimerEngine::load(10);
        engine.start();
        engine.pause();
        let after_once = engine;
        engine.pause();
        assert_eq!(engine, after_once);
    }

    #[test]
    fn test_countdown_auto_pauses_at_zero() {
        let mut engine = TimerEngine::load(5);
        engine.start();

        for _ in 0..4 {
            assert_eq!(engine.advance_second(), Tick::Advanced);
        }
        assert_eq!(engine.advance_second(), Tick::Expired);
        assert_eq!(engine.seconds, 0);
        assert_eq!(engine.state, TimerState::Paused);

        // A sixth tick has no further effect
        assert_eq!(engine.advance_second(), Tick::NoChange);
        assert_eq!(engine.seconds, 0);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut engine = TimerEngine::load(5);
        assert_eq!(engine.advance_second(), Tick::NoChange);
        assert_eq!(engine.seconds, 5);
    }

    #[test]
    fn test_reset_restores_original() {
        let mut engine = TimerEngine::load(90);
        engine.start();
        engine.advance_second();
        engine.advance_second();
        assert_eq!(engine.seconds, 88);

        engine.reset(90);
        assert_eq!(engine.seconds, 90);
        assert_eq!(engine.state, TimerState::Paused);
    }

    #[test]
    fn test_reset_with_no_timer() {
        let mut engine = TimerEngine::idle();
        engine.reset(0);
        assert_eq!(engine.seconds, 0);
        assert_eq!(engine.state, TimerState::Paused);
    }
}
