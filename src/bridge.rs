//! Plugin-bridge collaborator: the mechanism connecting the native shell to
//! the cross-platform application layer.

use crate::coordinator::LaunchCoordinator;

/// Opaque, side-effect-bearing registration hook.
///
/// Called synchronously exactly once per launch, after the authorization
/// request has been issued and before the launch continuation runs. The
/// coordinator passes itself as the registration context.
pub trait PluginBridge: Send + Sync {
    fn register(&self, context: &LaunchCoordinator);
}
