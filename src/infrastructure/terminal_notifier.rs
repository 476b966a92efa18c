//! Notifications printed to the terminal.

use colored::Colorize;

use crate::ui::notify::{Notification, NotificationKind, Notifier};

/// Prints each notification as one line on stderr.
///
/// A terminal has no auto-dismiss, so the display duration is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    /// Formats a notification as a single colored line.
    pub fn line(notification: &Notification) -> String {
        match notification.kind {
            NotificationKind::Success => format!("✅ {}", notification.message.green().bold()),
            NotificationKind::Error => format!("❌ {}", notification.message.red().bold()),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::line(&notification));
    }
}
