//! Navigation engine
//! Owns the mode and mouse flag and turns host events into selection updates

//! ## engine/ Invariants
//!
//! - All state lives in [`Engine`]; there are no globals.
//! - Every public operation either updates state or leaves it untouched;
//!   adapter failures are logged, never returned.
//! - Nothing is attempted while an editable element has focus.
//! - Each event runs to completion; motions are bounded by `max_nodes`.

use tracing::{debug, warn};

use crate::clipboard::Clipboard;
use crate::constants::storage::MOUSE_MODE_KEY;
use crate::dom::{block_of, Document, TextPosition, TextWalker};
use crate::key::{EventOutcome, HostMessage, KeyInput, MouseButton, MouseInput};
use crate::key_handler::{KeyAction, KeyHandler};
use crate::mode::{Mode, VisualExit};
use crate::movement::Motion;
use crate::scroll::{self, ScrollSurface};
use crate::selection::{self, SelectionSurface};
use crate::settings::{FlagStore, Settings};

/// Everything the engine needs from the embedding page
pub trait Host: Document + SelectionSurface + ScrollSurface {}

impl<T: Document + SelectionSurface + ScrollSurface + ?Sized> Host for T {}

pub struct Engine {
    mode: Mode,
    mouse_mode: bool,
    settings: Settings,
    clipboard: Box<dyn Clipboard>,
}

impl Engine {
    pub fn new(settings: Settings, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            mode: Mode::Normal,
            mouse_mode: settings.mouse_mode,
            settings,
            clipboard,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn mouse_mode(&self) -> bool {
        self.mouse_mode
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read persisted flags at startup
    ///
    /// A flag that was never saved keeps the configured value; an unreadable
    /// store falls back to off.
    pub fn load_flags(&mut self, store: &dyn FlagStore) {
        self.mouse_mode = match store.get_flag(MOUSE_MODE_KEY) {
            Ok(value) => value.unwrap_or(self.settings.mouse_mode),
            Err(err) => {
                warn!(%err, "could not read mouse mode flag");
                false
            }
        };
        debug!(mouse_mode = self.mouse_mode, "flags loaded");
    }

    /// Storage change notification
    pub fn on_flag_changed(&mut self, name: &str, value: bool) {
        if name == MOUSE_MODE_KEY {
            debug!(value, "mouse mode changed in storage");
            self.mouse_mode = value;
        }
    }

    /// Broadcast from elsewhere in the host
    pub fn receive<H: Host + ?Sized>(&mut self, host: &mut H, message: HostMessage) {
        debug!(?message, "host message");
        match message {
            HostMessage::MouseMode(on) => self.mouse_mode = on,
            HostMessage::VisualMode(on) => {
                if on != (self.mode == Mode::Visual) {
                    self.set_visual(host, on, VisualExit::Cursor);
                }
            }
        }
    }

    /// Handle a keydown
    ///
    /// `Handled` tells the host to prevent the key's default behavior.
    pub fn handle_key<H: Host + ?Sized>(&mut self, host: &mut H, input: KeyInput) -> EventOutcome {
        if host.is_editable_focused() {
            return EventOutcome::Ignored;
        }

        let action = KeyHandler::process_key(input);
        debug!(?action, mode = self.mode.label(), "key");
        match action {
            KeyAction::Ignore => EventOutcome::Ignored,
            KeyAction::ToggleVisual => {
                let on = self.mode != Mode::Visual;
                self.set_visual(host, on, VisualExit::Cursor);
                EventOutcome::Handled
            }
            KeyAction::Yank => {
                if !host.has_nonempty_selection() {
                    return EventOutcome::Ignored;
                }
                self.yank(host);
                EventOutcome::Handled
            }
            KeyAction::Cancel => {
                if self.mode == Mode::Visual {
                    self.set_visual(host, false, VisualExit::Cursor);
                } else {
                    host.clear();
                }
                EventOutcome::Handled
            }
            KeyAction::Motion(motion) => {
                self.navigate(host, motion);
                EventOutcome::Handled
            }
        }
    }

    /// Handle a mouse-down while mouse mode is on
    ///
    /// With a selection, the primary button runs `w` and the secondary button
    /// runs `b` from the selection anchor. Without one, a primary click on a word
    /// selects it.
    pub fn handle_mouse_down<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        input: MouseInput,
    ) -> EventOutcome {
        if !self.mouse_mode || host.is_editable_focused() {
            return EventOutcome::Ignored;
        }
        let motion = match input.button {
            MouseButton::Primary => Motion::WordForward,
            MouseButton::Secondary => Motion::WordBackward,
            MouseButton::Middle => return EventOutcome::Ignored,
        };

        if !host.has_nonempty_selection() {
            if input.button != MouseButton::Primary || self.mode == Mode::Visual {
                return EventOutcome::Ignored;
            }
            let selected = host
                .text_position_at_point(input.x, input.y)
                .is_some_and(|pos| selection::select_word_at(host, pos));
            return if selected {
                EventOutcome::Handled
            } else {
                EventOutcome::Ignored
            };
        }

        let Some(start) = click_start(host, input) else {
            return EventOutcome::Ignored;
        };
        debug!(button = ?input.button, ?start, "pointer motion");
        self.run_motion(host, motion, start);
        EventOutcome::Handled
    }

    /// Whether the host should suppress its context menu
    pub fn handle_context_menu<H: Host + ?Sized>(&mut self, host: &mut H) -> EventOutcome {
        if self.mouse_mode && !host.is_editable_focused() && host.has_nonempty_selection() {
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }

    /// Run `motion` from the current focus and apply the result
    ///
    /// In Normal mode the cursor is first collapsed to its end (forward
    /// motions) or start (backward motions). Returns the target, if one was found.
    pub fn navigate<H: Host + ?Sized>(&mut self, host: &mut H, motion: Motion) -> Option<TextPosition> {
        if !self.ensure_selection(host) {
            debug!("no text to navigate");
            return None;
        }
        let (Some(anchor), Some(focus)) = (host.anchor(), host.focus()) else {
            return None;
        };
        if !self.mode.extends() {
            if motion.is_backward() {
                host.collapse_to_start();
            } else {
                host.collapse_to_end();
            }
        }
        let start = host.focus().unwrap_or(focus);
        let target = self.run_motion(host, motion, start);
        if target.is_none() {
            // a motion without a target leaves the cursor as it was
            host.set_selection(anchor, focus);
        }
        target
    }

    /// Seed a cursor at the first visible text when nothing is selected
    ///
    /// Returns false when the document has no visible text.
    pub fn ensure_selection<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if host.has_selection() {
            return true;
        }
        let first = TextWalker::at_root(&*host).next_node();
        match first {
            Some(node) => {
                let pos = TextPosition::new(node, 0);
                host.set_selection(pos, pos);
                true
            }
            None => false,
        }
    }

    /// Enter or leave Visual mode
    pub fn set_visual<H: Host + ?Sized>(&mut self, host: &mut H, on: bool, exit: VisualExit) {
        if on {
            self.mode = Mode::Visual;
            selection::reapply(host);
        } else {
            self.mode = Mode::Normal;
            if host.has_selection() {
                selection::leave_visual(host, exit);
            }
        }
        debug!(mode = self.mode.label(), "mode changed");
    }

    /// Copy the selection, then drop it
    ///
    /// State changes before the clipboard is written; a failed write is only logged.
    fn yank<H: Host + ?Sized>(&mut self, host: &mut H) {
        let text = host.selected_text();
        if self.mode == Mode::Visual {
            self.set_visual(host, false, VisualExit::Clear);
        } else {
            host.clear();
        }
        if let Err(err) = self.clipboard.write_text(&text) {
            warn!(%err, "clipboard write failed");
        }
    }

    fn run_motion<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        motion: Motion,
        start: TextPosition,
    ) -> Option<TextPosition> {
        let target = motion.find(&*host, start, self.settings.max_nodes)?;
        let extend = self.mode.extends();
        selection::move_to(host, target, extend);
        let block = block_of(&*host, target.node);
        scroll::reconcile(host, block, &self.settings.scroll);
        debug!(motion = %motion.key(), ?target, extend, "moved");
        Some(target)
    }
}

/// Starting point of a pointer motion
///
/// The selection anchor when it sits in a text node; otherwise the text under
/// the pointer.
fn click_start<H: Host + ?Sized>(host: &H, input: MouseInput) -> Option<TextPosition> {
    match host.anchor() {
        Some(anchor) if host.is_text(anchor.node) => Some(anchor),
        _ => host.text_position_at_point(input.x, input.y),
    }
}
