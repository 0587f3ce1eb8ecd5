//! Engine mode definitions

/// Navigation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Motions replace the selection with a one-character cursor
    #[default]
    Normal,
    /// Motions extend the focus end of the selection
    Visual,
}

impl Mode {
    /// Whether motions should extend the current selection
    #[must_use]
    pub fn extends(self) -> bool {
        self == Mode::Visual
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => crate::constants::modes::NORMAL,
            Mode::Visual => crate::constants::modes::VISUAL,
        }
    }
}

/// How the selection is left behind when Visual mode ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualExit {
    /// Collapse to a one-character cursor at the focus
    Cursor,
    /// Drop the selection entirely (after a copy)
    Clear,
}
