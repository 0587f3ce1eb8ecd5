//! Test utilities
//! Shared testing helpers and mocks

use std::cell::RefCell;
use std::rc::Rc;

use crate::clipboard::Clipboard;
use crate::error::{ErrorType, Result, WalkError};
use crate::settings::FlagStore;

/// Clipboard that records every write
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the engine.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Clipboard whose writes always fail
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(WalkError::new(
            ErrorType::Clipboard,
            "CLIPBOARD_DENIED",
            "permission denied",
        ))
    }
}

/// Flag store that cannot be read
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenFlagStore;

impl FlagStore for BrokenFlagStore {
    fn get_flag(&self, _name: &str) -> Result<Option<bool>> {
        Err(WalkError::new(ErrorType::Storage, "FLAG_STORE_IO", "disk gone"))
    }

    fn set_flag(&mut self, _name: &str, _value: bool) -> Result<()> {
        Err(WalkError::new(ErrorType::Storage, "FLAG_STORE_IO", "disk gone"))
    }
}
