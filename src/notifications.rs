//! Best-effort user alerts, injected as a capability so the core logic is
//! testable without a host alerting surface.

/// Sink for user-facing alerts. Infallible by design: a notification that
/// cannot be delivered is silently dropped, never an error.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Delivers alerts through the platform notification surface
pub struct SystemNotifier;

impl Notifier for SystemNotifier {
    fn notify(&self, title: &str, body: &str) {
        #[cfg(target_os = "macos")]
        {
            let script = format!(
                r#"display notification "{}" with title "{}""#,
                body.replace('"', "\\\""),
                title.replace('"', "\\\"")
            );

            let _ = std::process::Command::new("osascript")
                .arg("-e")
                .arg(&script)
                .output();
        }

        #[cfg(target_os = "linux")]
        {
            let _ = std::process::Command::new("notify-send")
                .arg(title)
                .arg(body)
                .output();
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            let _ = (title, body);
        }
    }
}

/// Swallows alerts (tests, or notifications disabled)
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

/// Pick the notifier for this run. Set MONOTASK_DISABLE_NOTIFICATIONS to
/// suppress alerts entirely.
pub fn system_notifier() -> Box<dyn Notifier> {
    if std::env::var("MONOTASK_DISABLE_NOTIFICATIONS").is_ok() {
        Box::new(NoopNotifier)
    } else {
        Box::new(SystemNotifier)
    }
}
