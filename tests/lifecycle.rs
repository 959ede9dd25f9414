//! Driving the coordinator through named lifecycle events.

use std::sync::{Arc, Mutex};

use beacon_shell::{
    AuthorityError, Capabilities, DefaultContinuation, DiagnosticSink, LaunchCoordinator,
    LaunchOptions, Lifecycle, NotificationAuthority, NotificationReceiver, PermissionCallback,
    PluginBridge, ShellEvent, PERMISSION_DENIED,
};

struct NullAuthority;

impl NotificationAuthority for NullAuthority {
    fn set_receiver(&self, _receiver: Arc<dyn NotificationReceiver>) {}
    fn request_authorization(&self, _capabilities: Capabilities, _on_result: PermissionCallback) {}
}

struct NullBridge;

impl PluginBridge for NullBridge {
    fn register(&self, _context: &LaunchCoordinator) {}
}

#[derive(Default)]
struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl DiagnosticSink for MemorySink {
    fn record(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[test]
fn coordinator_handles_launch_and_permission_result_events() {
    let sink = Arc::new(MemorySink::default());
    let coordinator = Arc::new(LaunchCoordinator::new(
        Arc::new(NullAuthority),
        Arc::new(NullBridge),
        Arc::new(DefaultContinuation),
        sink.clone(),
    ));

    let mut lifecycle = Lifecycle::new();
    lifecycle.register(coordinator);

    let event = ShellEvent::Launch(LaunchOptions::new());
    assert_eq!(event.name(), "launch");
    assert_eq!(lifecycle.emit(&event), Some(true));

    let event = ShellEvent::PermissionResult {
        granted: false,
        error: Some(AuthorityError::Unavailable),
    };
    assert_eq!(event.name(), "permission-result");
    // Permission results carry no launch-proceed decision.
    assert_eq!(lifecycle.emit(&event), None);

    assert_eq!(
        *sink.lines.lock().unwrap(),
        vec![PERMISSION_DENIED.to_string()]
    );
}
