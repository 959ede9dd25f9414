//! Notification authority backed by `tauri-plugin-notification`.

use std::sync::{Arc, Mutex};

use tauri::AppHandle;
use tauri_plugin_notification::{NotificationExt, PermissionState};

use crate::authority::{
    AuthorityError, Capabilities, NotificationAuthority, NotificationReceiver, PermissionCallback,
};

/// Adapts the Tauri notification plugin to [`NotificationAuthority`].
pub struct TauriAuthority {
    app: AppHandle,
    receiver: Mutex<Option<Arc<dyn NotificationReceiver>>>,
}

impl TauriAuthority {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            receiver: Mutex::new(None),
        }
    }
}

impl NotificationAuthority for TauriAuthority {
    fn set_receiver(&self, receiver: Arc<dyn NotificationReceiver>) {
        if let Ok(mut slot) = self.receiver.lock() {
            *slot = Some(receiver);
        }
    }

    fn request_authorization(&self, capabilities: Capabilities, on_result: PermissionCallback) {
        // The plugin prompts for alert, sound, and badge as one unit; the
        // capability set is logged for traceability.
        log::debug!("requesting notification authorization: {capabilities}");

        let app = self.app.clone();
        tauri::async_runtime::spawn_blocking(move || {
            match app.notification().request_permission() {
                Ok(PermissionState::Granted) => on_result(true, None),
                Ok(_) => on_result(false, None),
                Err(e) => on_result(false, Some(AuthorityError::Request(e.to_string()))),
            }
        });
    }
}
