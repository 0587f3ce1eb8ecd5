//! Key handler
//! Translates keydown events into engine actions

/// ## `key_handler`/ Invariants
///
/// - Key handlers translate input events into `KeyAction`s.
/// - Key handlers never touch the document or the selection.
/// - Keys held with ctrl, alt or meta never map to a motion or mode command.
/// - Unrecognized keys yield `Ignore` so the host keeps its default behavior.
/// - Key handling is deterministic.
use crate::key::{Key, KeyInput};
use crate::movement::Motion;

/// What the engine should do with a keydown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Run a motion from the current focus
    Motion(Motion),
    /// Flip between Normal and Visual mode
    ToggleVisual,
    /// Copy the selection and drop it
    Yank,
    /// Leave Visual mode, or drop the selection
    Cancel,
    /// Not ours; let the host handle it
    Ignore,
}

/// Key handler for engine commands
pub struct KeyHandler;

impl KeyHandler {
    /// Process a keydown and determine the action to take
    #[must_use]
    pub fn process_key(input: KeyInput) -> KeyAction {
        if input.key == Key::Escape {
            return KeyAction::Cancel;
        }
        if !input.modifiers.is_empty() {
            return KeyAction::Ignore;
        }

        match input.key {
            Key::Char('v') => KeyAction::ToggleVisual,
            Key::Char('y') => KeyAction::Yank,
            Key::Char(c) => Motion::from_key(c).map_or(KeyAction::Ignore, KeyAction::Motion),
            _ => KeyAction::Ignore,
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
