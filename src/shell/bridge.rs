//! Plugin bridge wiring the native shell to the application layer.

use tauri::AppHandle;

use crate::bridge::PluginBridge;
use crate::coordinator::LaunchCoordinator;

/// Registers the plugins that must attach after the app handle exists.
pub struct TauriBridge {
    app: AppHandle,
}

impl TauriBridge {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl PluginBridge for TauriBridge {
    fn register(&self, _context: &LaunchCoordinator) {
        // Single instance on desktop platforms: a second launch focuses the
        // existing main window instead of starting another process.
        #[cfg(not(any(target_os = "android", target_os = "ios")))]
        {
            use tauri::Manager;

            let registered = self
                .app
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }));
            if let Err(e) = registered {
                log::warn!("single-instance plugin registration failed: {e}");
            }
        }

        if cfg!(debug_assertions) {
            let registered = self.app.plugin(
                tauri_plugin_log::Builder::default()
                    .level(log::LevelFilter::Info)
                    .build(),
            );
            if let Err(e) = registered {
                log::warn!("log plugin registration failed: {e}");
            }
        }
    }
}
