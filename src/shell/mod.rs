//! Tauri-backed host shell: concrete collaborators and the application
//! entry point.

mod authority;
mod bridge;

use std::sync::Arc;

pub use authority::TauriAuthority;
pub use bridge::TauriBridge;

use crate::continuation::DefaultContinuation;
use crate::coordinator::LaunchCoordinator;
use crate::diagnostics::LogSink;
use crate::lifecycle::{Lifecycle, ShellEvent};
use crate::options::LaunchOptions;

/// Builds and runs the Beacon shell.
///
/// The launch coordinator is driven from the setup hook through the
/// lifecycle layer; the Tauri run loop itself is the launch continuation, so
/// the coordinator gets [`DefaultContinuation`].
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let handle = app.handle().clone();
            let coordinator = Arc::new(LaunchCoordinator::new(
                Arc::new(TauriAuthority::new(handle.clone())),
                Arc::new(TauriBridge::new(handle)),
                Arc::new(DefaultContinuation),
                Arc::new(LogSink),
            ));

            let mut lifecycle = Lifecycle::new();
            lifecycle.register(coordinator);

            if lifecycle.emit(&ShellEvent::Launch(LaunchOptions::new())) == Some(false) {
                return Err("launch aborted by a shell module".into());
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
