//! Terminal host
//! Stands in for a browser page: reads input events and draws the document

/// ## term/ Invariants
///
/// - Terminal handling is isolated behind [`TerminalBackend`].
/// - Raw mode and mouse capture are enabled before input processing begins.
/// - Terminal state is restored on normal exit and on error.
/// - Rendering reads the document and engine state, it never mutates them.
use crate::error::Result;
use crate::key::{KeyInput, MouseInput};

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

impl Size {
    /// Rows available to the document; the last row holds the indicator line
    #[must_use]
    pub fn text_rows(self) -> u16 {
        self.rows.saturating_sub(1)
    }
}

/// Input the host loop reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TermEvent {
    Key(KeyInput),
    MouseDown(MouseInput),
    Resize(Size),
}

/// Terminal backend trait
pub trait TerminalBackend {
    /// Enter raw mode, the alternate screen and mouse capture
    fn init(&mut self) -> Result<()>;

    /// Restore terminal to original state
    fn deinit(&mut self);

    /// Block until an event the host cares about arrives
    fn read_event(&mut self) -> Result<TermEvent>;

    /// Get terminal dimensions
    fn get_size(&self) -> Result<Size>;
}

pub mod crossterm;
pub mod render;
