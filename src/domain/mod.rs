pub mod enums;
pub mod task;
pub mod timer;
pub mod views;

pub use enums::{TimerState, TimerUrgency, UiMode};
pub use task::{CompletedTask, Task};
pub use timer::{format_hms, Tick, TimerEngine};
pub use views::{project, FocusView, HistoryRow, TimerView, ViewModel, MAX_HISTORY_ROWS};
