//! Lifecycle event layer.
//!
//! The host drives the shell through named events instead of virtual methods
//! on an inherited delegate: "launch" once per process start, and
//! "permission-result" whenever the notification authority resolves. Modules
//! register on a [`Lifecycle`] and receive every emitted event.

use std::sync::Arc;

use crate::authority::AuthorityError;
use crate::options::LaunchOptions;

/// A named shell lifecycle event.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// Process start, carrying the opaque launch bundle.
    Launch(LaunchOptions),
    /// Asynchronous permission outcome from the notification authority.
    PermissionResult {
        granted: bool,
        error: Option<AuthorityError>,
    },
}

impl ShellEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ShellEvent::Launch(_) => "launch",
            ShellEvent::PermissionResult { .. } => "permission-result",
        }
    }
}

/// A participant in the shell lifecycle.
///
/// `on_event` takes an `Arc` receiver because modules hand themselves out as
/// callback targets while processing an event.
pub trait ShellModule: Send + Sync {
    /// Handles one event. Returns `Some(proceed)` when the event carries a
    /// launch-proceed decision, `None` otherwise.
    fn on_event(self: Arc<Self>, event: ShellEvent) -> Option<bool>;
}

/// Registry dispatching lifecycle events to shell modules.
#[derive(Default)]
pub struct Lifecycle {
    modules: Vec<Arc<dyn ShellModule>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, module: Arc<dyn ShellModule>) {
        self.modules.push(module);
    }

    /// Emits `event` to every registered module, in registration order.
    ///
    /// Returns the last launch-proceed decision any module produced, or
    /// `None` if the event carried no decision.
    pub fn emit(&self, event: &ShellEvent) -> Option<bool> {
        let mut decision = None;
        for module in &self.modules {
            if let Some(proceed) = Arc::clone(module).on_event(event.clone()) {
                decision = Some(proceed);
            }
        }
        decision
    }
}
