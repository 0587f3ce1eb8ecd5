//! Selection and cursor control
//!
//! Turns motion results into selection updates. Normal mode shows the cursor
//! as a one-character range so it stays visible on static content; Visual mode
//! only ever moves the focus end.

//! ## selection/ Invariants
//!
//! - Only the focus end is moved by motions; the anchor is preserved.
//! - A Normal-mode cursor never extends past the end of its text node.
//! - Controller functions never scroll; the engine reconciles afterwards.

use crate::dom::{Document, TextPosition};
use crate::mode::VisualExit;
use crate::movement::is_word_char;

/// Selection primitives of the host platform
pub trait SelectionSurface {
    /// Fixed end of the selection
    fn anchor(&self) -> Option<TextPosition>;

    /// Active end of the selection
    fn focus(&self) -> Option<TextPosition>;

    /// Replace the selection with one running from `anchor` to `focus`
    fn set_selection(&mut self, anchor: TextPosition, focus: TextPosition);

    /// Move the focus end, keeping the anchor; no-op without a selection
    fn extend(&mut self, focus: TextPosition);

    /// Collapse onto the earlier end in document order
    fn collapse_to_start(&mut self);

    /// Collapse onto the later end in document order
    fn collapse_to_end(&mut self);

    fn clear(&mut self);

    /// Text covered by the selection
    fn selected_text(&self) -> String;

    /// Whether keyboard focus sits in an input, text area or content-editable element
    fn is_editable_focused(&self) -> bool;

    fn has_selection(&self) -> bool {
        self.focus().is_some()
    }

    /// A selection exists and covers at least one character
    fn has_nonempty_selection(&self) -> bool {
        self.has_selection() && !self.selected_text().is_empty()
    }
}

/// Apply a motion target to the selection
///
/// Without `extend` the selection becomes `[offset, offset + 1)` clamped to the
/// node's length. With `extend` the focus moves to `target`.
pub fn move_to<H>(host: &mut H, target: TextPosition, extend: bool)
where
    H: Document + SelectionSurface + ?Sized,
{
    if extend {
        host.extend(target);
        return;
    }
    let end = (target.offset + 1).min(host.text_len(target.node));
    host.set_selection(target, TextPosition::new(target.node, end));
}

/// Re-apply the current selection so dependent rendering picks it up
pub fn reapply<H: SelectionSurface + ?Sized>(host: &mut H) {
    if let (Some(anchor), Some(focus)) = (host.anchor(), host.focus()) {
        host.set_selection(anchor, focus);
    }
}

/// Leave Visual mode, shaping the selection according to `exit`
pub fn leave_visual<H>(host: &mut H, exit: VisualExit)
where
    H: Document + SelectionSurface + ?Sized,
{
    let focus = host.focus();
    host.clear();
    if exit == VisualExit::Clear {
        return;
    }
    if let Some(pos) = focus {
        if host.is_text(pos.node) && pos.offset < host.text_len(pos.node) {
            host.set_selection(pos, TextPosition::new(pos.node, pos.offset + 1));
        }
    }
}

/// Select the word enclosing `pos`
///
/// Returns false (and leaves the selection alone) when `pos` is not on a word
/// character of a non-empty text node.
pub fn select_word_at<H>(host: &mut H, pos: TextPosition) -> bool
where
    H: Document + SelectionSurface + ?Sized,
{
    let Some(text) = host.text(pos.node) else {
        return false;
    };
    let chars: Vec<char> = text.chars().collect();
    match chars.get(pos.offset) {
        Some(&c) if is_word_char(c) => {}
        _ => return false,
    }

    let mut start = pos.offset;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = pos.offset + 1;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    host.set_selection(
        TextPosition::new(pos.node, start),
        TextPosition::new(pos.node, end),
    );
    true
}
