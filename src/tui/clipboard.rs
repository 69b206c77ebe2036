//! Clipboard access for copying answers
//!
//! A small trait over the system clipboard so the chat screen can be tested
//! without a display server.

/// Result type for clipboard operations
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Clipboard error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard available (headless session, SSH, ...)
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// Writing to the clipboard failed
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Anything text can be copied into
pub trait ClipboardProvider {
    /// Copy text to clipboard
    fn set_text(&mut self, text: &str) -> ClipboardResult<()>;
}

/// System clipboard backed by arboard
///
/// The handle is opened lazily on the first copy and kept afterwards; on
/// X11 the copied text only stays available while the handle lives.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Create a clipboard that connects on first use
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable("not initialized".to_string())),
        }
    }
}
