//! Input events delivered by the host

/// Key identifier of a keydown event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    Escape,
    Enter,
    Tab,
    Backspace,
    /// Function key (F1..F12)
    F(u8),
    /// Anything the engine has no use for
    Other,
}

/// Modifier flags carried with a keydown event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// True when no command-style modifier is held (shift is not tracked)
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.ctrl || self.alt || self.meta)
    }
}

/// A keydown event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Unmodified key press
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    #[must_use]
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }
}

/// Pointer button of a mouse-down event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// A mouse-down event in viewport (client) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseInput {
    pub button: MouseButton,
    pub x: f64,
    pub y: f64,
}

impl MouseInput {
    #[must_use]
    pub fn new(button: MouseButton, x: f64, y: f64) -> Self {
        Self { button, x, y }
    }
}

/// Broadcasts from the rest of the host (settings UI, other features)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMessage {
    /// Mouse mode was switched on or off elsewhere
    MouseMode(bool),
    /// Visual mode was requested on or off elsewhere
    VisualMode(bool),
}

/// What the host should do with the event after the engine saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EventOutcome {
    /// The engine consumed the event; suppress default handling
    Handled,
    /// Pass the event through untouched
    Ignored,
}

impl EventOutcome {
    pub fn is_handled(self) -> bool {
        self == EventOutcome::Handled
    }
}
