// Beacon Shell - Tauri Native Application
// Native desktop and mobile wrapper for the Beacon application layer.
//
// The launch path is deliberately small: on startup the shell asks the OS
// for notification permission, registers the plugin bridge, and defers to
// the default launch continuation. Everything beyond that sequence lives in
// the application layer, behind the collaborator traits defined here.

pub mod authority;
pub mod bridge;
pub mod continuation;
pub mod coordinator;
pub mod diagnostics;
pub mod lifecycle;
pub mod options;

#[cfg(feature = "tauri-app")]
mod shell;

pub use authority::{
    AuthorityError, Capabilities, NotificationAuthority, NotificationReceiver, PermissionCallback,
};
pub use bridge::PluginBridge;
pub use continuation::{DefaultContinuation, LaunchContinuation};
pub use coordinator::LaunchCoordinator;
pub use diagnostics::{DiagnosticSink, LogSink, PERMISSION_DENIED, PERMISSION_GRANTED};
pub use lifecycle::{Lifecycle, ShellEvent, ShellModule};
pub use options::LaunchOptions;

#[cfg(feature = "tauri-app")]
pub use shell::{run, TauriAuthority, TauriBridge};
