//! Notification-authority collaborator: the OS subsystem that grants or
//! denies permission to display notifications.
//!
//! The shell only calls this interface; the host provides the
//! implementation. The coordinator is handed an authority at construction
//! and binds its own receiver on it during launch, so no process-global
//! delegate slot is mutated.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capability flags included in an authorization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub alert: bool,
    pub sound: bool,
    pub badge: bool,
}

impl Capabilities {
    /// The fixed set requested at launch: alert, sound, and badge.
    pub const ALL: Self = Self {
        alert: true,
        sound: true,
        badge: true,
    };
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (enabled, label) in [
            (self.alert, "alert"),
            (self.sound, "sound"),
            (self.badge, "badge"),
        ] {
            if enabled {
                write!(f, "{sep}{label}")?;
                sep = "+";
            }
        }
        if sep.is_empty() {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// Failure reported by the notification authority.
///
/// Absorbed by the coordinator: logged as a denial, never escalated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorityError {
    /// The authorization request itself failed, with the OS-supplied reason.
    #[error("authorization request failed: {0}")]
    Request(String),

    /// The notification subsystem is not available on this host.
    #[error("notification authority unavailable")]
    Unavailable,
}

/// One-shot callback carrying the permission result.
///
/// Invoked exactly once per request, on whatever execution context the
/// authority chooses.
pub type PermissionCallback = Box<dyn FnOnce(bool, Option<AuthorityError>) + Send + 'static>;

/// Receiver slot for notification callbacks arriving after launch.
pub trait NotificationReceiver: Send + Sync {
    /// Delivered once per authorization request; may fire before or after
    /// the launch sequence returns.
    fn on_permission_result(&self, granted: bool, error: Option<AuthorityError>);
}

/// The OS-provided notification authority.
pub trait NotificationAuthority: Send + Sync {
    /// Binds `receiver` for future notification-related callbacks.
    fn set_receiver(&self, receiver: Arc<dyn NotificationReceiver>);

    /// Issues an asynchronous authorization request for `capabilities`.
    ///
    /// Fire-and-forget: implementations must not block the caller on the
    /// user's decision. `on_result` is invoked exactly once when the outcome
    /// is known.
    fn request_authorization(&self, capabilities: Capabilities, on_result: PermissionCallback);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_set_has_all_three_flags() {
        assert!(Capabilities::ALL.alert);
        assert!(Capabilities::ALL.sound);
        assert!(Capabilities::ALL.badge);
    }

    #[test]
    fn capabilities_display() {
        assert_eq!(Capabilities::ALL.to_string(), "alert+sound+badge");

        let silent = Capabilities {
            alert: true,
            sound: false,
            badge: true,
        };
        assert_eq!(silent.to_string(), "alert+badge");

        let none = Capabilities {
            alert: false,
            sound: false,
            badge: false,
        };
        assert_eq!(none.to_string(), "none");
    }

    #[test]
    fn error_messages() {
        let err = AuthorityError::Request("prompt dismissed".into());
        assert_eq!(
            err.to_string(),
            "authorization request failed: prompt dismissed"
        );
        assert_eq!(
            AuthorityError::Unavailable.to_string(),
            "notification authority unavailable"
        );
    }
}
