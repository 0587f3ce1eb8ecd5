//! Clipboard access
//!
//! Copying is best-effort: callers log failures and carry on.

use crate::constants::errors::CLIPBOARD_UNAVAILABLE;
use crate::error::{ErrorType, Result, WalkError};

/// Text clipboard of the host platform
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| {
            WalkError::warning(ErrorType::Clipboard, CLIPBOARD_UNAVAILABLE, e.to_string())
        })?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Clipboard that drops everything; used when no system clipboard is available
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}
