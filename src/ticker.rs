use std::time::Duration;

/// Event-loop poll timeout in milliseconds. The countdown itself advances
/// by whole wall-clock seconds; polling faster just keeps the display
/// responsive.
pub const POLL_INTERVAL_MS: u64 = 250;

/// Get the event poll timeout
pub fn poll_timeout() -> Duration {
    Duration::from_millis(POLL_INTERVAL_MS)
}
