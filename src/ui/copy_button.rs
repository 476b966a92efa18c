//! Copy-to-clipboard button.

use askama::Template;
use std::time::Duration;

use crate::ui::clipboard::{Clipboard, ClipboardError};
use crate::ui::notify::{Notification, Notifier};

/// Tooltip shown on hover or focus.
pub const COPY_TOOLTIP: &str = "Copy link to clipboard";

/// Notification shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Copied to clipboard";

/// Notification shown when the clipboard refuses the write.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// A clipboard icon button that copies a fixed text.
///
/// Renders `templates/components/copy_button.html`. In the browser the
/// `data-copy-text` attribute is picked up by `static/link-cards.js`; on the
/// server side [`CopyButton::activate`] drives any [`Clipboard`].
#[derive(Template, Debug, Clone, PartialEq, Eq)]
#[template(path = "components/copy_button.html")]
pub struct CopyButton {
    pub text: String,
}

impl CopyButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Copies the button text and reports the outcome.
    ///
    /// Exactly one clipboard write is attempted, never retried. Exactly one
    /// notification follows it: [`COPIED_MESSAGE`] on success,
    /// [`COPY_FAILED_MESSAGE`] on failure.
    ///
    /// # Errors
    ///
    /// Returns the [`ClipboardError`] from the write after the failure
    /// notification has been shown.
    pub async fn activate(
        &self,
        clipboard: &dyn Clipboard,
        notifier: &dyn Notifier,
    ) -> Result<(), ClipboardError> {
        match clipboard.write_text(&self.text).await {
            Ok(()) => {
                metrics::counter!("link_cards_copy_total", "outcome" => "success").increment(1);
                tracing::debug!(len = self.text.len(), "Copied text to clipboard");
                notifier.notify(Notification::success(COPIED_MESSAGE));
                Ok(())
            }
            Err(e) => {
                metrics::counter!("link_cards_copy_total", "outcome" => "failure").increment(1);
                tracing::warn!(error = %e, "Clipboard write failed");
                notifier.notify(Notification::error(COPY_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// Copies the button text, then keeps it on the clipboard for a
    /// short-lived process.
    ///
    /// Runs [`CopyButton::activate`] and, only if the write succeeded,
    /// [`Clipboard::hold`] for at most `timeout`.
    pub async fn activate_and_hold(
        &self,
        clipboard: &dyn Clipboard,
        notifier: &dyn Notifier,
        timeout: Duration,
    ) -> Result<(), ClipboardError> {
        self.activate(clipboard, notifier).await?;
        clipboard.hold(&self.text, timeout).await
    }
}
