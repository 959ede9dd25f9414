//! Launch coordinator: the startup orchestration performed once per process.

use std::sync::Arc;

use crate::authority::{
    AuthorityError, Capabilities, NotificationAuthority, NotificationReceiver,
};
use crate::bridge::PluginBridge;
use crate::continuation::LaunchContinuation;
use crate::diagnostics::{DiagnosticSink, PERMISSION_DENIED, PERMISSION_GRANTED};
use crate::lifecycle::{ShellEvent, ShellModule};
use crate::options::LaunchOptions;

/// Orchestrates the launch sequence: bind the notification receiver, issue
/// the authorization request, register the plugin bridge, then defer to the
/// default launch continuation.
///
/// All collaborators are injected at construction. The coordinator keeps no
/// other state; the permission outcome only selects which diagnostic line is
/// recorded.
pub struct LaunchCoordinator {
    authority: Arc<dyn NotificationAuthority>,
    bridge: Arc<dyn PluginBridge>,
    continuation: Arc<dyn LaunchContinuation>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl LaunchCoordinator {
    pub fn new(
        authority: Arc<dyn NotificationAuthority>,
        bridge: Arc<dyn PluginBridge>,
        continuation: Arc<dyn LaunchContinuation>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            authority,
            bridge,
            continuation,
            diagnostics,
        }
    }

    /// Runs the launch sequence and returns the continuation's decision.
    ///
    /// Takes an `Arc` receiver because the coordinator hands itself to the
    /// authority as the callback target. The authorization request never
    /// suspends the launch path: the bridge registration and the
    /// continuation run whether or not the permission result has arrived.
    /// The result is delivered later to
    /// [`NotificationReceiver::on_permission_result`], on whatever context
    /// the authority chooses.
    pub fn on_launch(self: Arc<Self>, options: &LaunchOptions) -> bool {
        self.authority.set_receiver(self.clone());

        let receiver: Arc<dyn NotificationReceiver> = self.clone();
        self.authority.request_authorization(
            Capabilities::ALL,
            Box::new(move |granted, error| receiver.on_permission_result(granted, error)),
        );

        self.bridge.register(&self);
        self.continuation.handle_launch(options)
    }
}

impl NotificationReceiver for LaunchCoordinator {
    /// Records exactly one diagnostic line per launch. A request failure is
    /// absorbed here as a denial; the error value is not inspected further.
    fn on_permission_result(&self, granted: bool, _error: Option<AuthorityError>) {
        if granted {
            self.diagnostics.record(PERMISSION_GRANTED);
        } else {
            self.diagnostics.record(PERMISSION_DENIED);
        }
    }
}

impl ShellModule for LaunchCoordinator {
    fn on_event(self: Arc<Self>, event: ShellEvent) -> Option<bool> {
        match event {
            ShellEvent::Launch(options) => Some(self.on_launch(&options)),
            ShellEvent::PermissionResult { granted, error } => {
                self.on_permission_result(granted, error);
                None
            }
        }
    }
}
