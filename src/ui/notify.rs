//! Transient user notifications ("toasts").

use std::time::Duration;

/// How long a notification stays visible before dismissing itself.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short-lived, non-blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            ttl: NOTIFICATION_TTL,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            ttl: NOTIFICATION_TTL,
        }
    }
}

/// Displays notifications. Fire-and-forget: nothing is returned.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
