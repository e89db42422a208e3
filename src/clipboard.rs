use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Clipboard facility seam. Callers that only confirm optimistically are
/// free to discard the result.
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`. The handle is opened per write;
/// keeping it open for the process lifetime pins the X11 selection.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Accepts every write and drops it. Useful headless and in demos.
#[derive(Debug, Default)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}
