//! OS clipboard access.

use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::ui::clipboard::{Clipboard, ClipboardError};

/// Clipboard backed by the operating system, via `arboard`.
///
/// Each call opens a fresh handle on a blocking thread. On Linux the
/// contents belong to the writing process, so a command that exits right
/// after copying calls [`Clipboard::hold`] to serve them until a clipboard
/// manager or another program takes over.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "clipboard")]
fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

#[cfg(feature = "clipboard")]
fn write(text: String) -> Result<(), ClipboardError> {
    open()?
        .set_text(text)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

/// Re-owns the selection and blocks until it is taken over or `deadline`.
#[cfg(all(feature = "clipboard", target_os = "linux"))]
fn serve_until(text: String, deadline: Instant) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    open()?
        .set()
        .wait_until(deadline)
        .text(text)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

// Elsewhere the OS keeps the contents after the process exits.
#[cfg(not(all(feature = "clipboard", target_os = "linux")))]
fn serve_until(_text: String, _deadline: Instant) -> Result<(), ClipboardError> {
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn write(_text: String) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable(
        "built without the `clipboard` feature".to_string(),
    ))
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || write(text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }

    async fn hold(&self, text: &str, timeout: Duration) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let deadline = Instant::now() + timeout;

        tokio::task::spawn_blocking(move || serve_until(text, deadline))
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hold_returns_by_deadline() {
        let started = Instant::now();

        let result = SystemClipboard::new()
            .hold("https://sho.rt/abc123", Duration::from_millis(50))
            .await;

        assert!(started.elapsed() < Duration::from_secs(10));
        // Headless machines report the clipboard as unavailable.
        match result {
            Ok(()) | Err(ClipboardError::Unavailable(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[cfg(not(feature = "clipboard"))]
    #[tokio::test]
    async fn test_write_without_feature_is_unavailable() {
        let result = SystemClipboard::new().write_text("x").await;
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }
}
