//! Clipboard boundary used by the copy button.

use async_trait::async_trait;
use std::time::Duration;

/// Errors surfaced by a clipboard write.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write was rejected: {0}")]
    WriteFailed(String),
}

/// Writes text to a clipboard.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - OS clipboard (feature `clipboard`)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the clipboard cannot be opened or the
    /// write is refused.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Keeps `text` on the clipboard after a successful write until another
    /// program takes it over or `timeout` passes.
    ///
    /// Needed where the writing process owns the contents, as on X11. The
    /// default returns at once.
    async fn hold(&self, _text: &str, _timeout: Duration) -> Result<(), ClipboardError> {
        Ok(())
    }
}
