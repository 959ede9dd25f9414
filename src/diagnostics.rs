//! Append-only diagnostic sink for launch-time messages.
//!
//! The permission outcome is the only thing the shell reports, and it is
//! reported through this trait so tests can observe the exact lines. The
//! production sink forwards to the `log` facade.

/// Line written when the user grants notification permission.
pub const PERMISSION_GRANTED: &str = "Notification permission granted";

/// Line written when the user denies notification permission or the request
/// fails.
pub const PERMISSION_DENIED: &str = "Notification permission denied";

/// Process-wide append-only text log. Written, never read back.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, line: &str);
}

/// Default sink: emits through `log::info!`.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, line: &str) {
        log::info!(target: "beacon_shell", "{line}");
    }
}
