//! Motion semantics for reading navigation
//!
//! This module centralizes the logic for locating word and paragraph
//! boundaries across the visible text of a rendered document.
//!
//! ## Design
//!
//! Boundaries are based on a binary character classification:
//! - **Word**: ASCII letters, digits and underscore
//! - **Non-word**: everything else (whitespace, punctuation, other scripts)
//!
//! This means:
//! - `hello_world` is ONE word (underscore is a word character)
//! - `foo->bar` is TWO words: `foo`, `bar` (the arrow is skipped like space)
//! - A word scan started inside a word continues across text nodes, so `b`
//!   from `walk` in `<b>read</b>walk` lands on `read`
//! - A cursor at the end of a node has nothing under it: `w` from there
//!   lands on the first word character of the next node (`walk`)
//!
//! Word scans are explicit state machines ([`scan`]) fed one character at a
//! time; the motions ([`motions`]) drive them over a [`TextWalker`] and never
//! touch the selection. Every motion visits at most `max_nodes` text nodes
//! and reports "not found" past that bound.
//!
//! [`TextWalker`]: crate::dom::TextWalker
//!
//! ## Modules
//!
//! - [`classify`] - Character classification
//! - [`scan`] - Word scanner state machines
//! - [`motions`] - `w`, `b`, `}` and `{` over a document

pub mod classify;
pub mod motions;
pub mod scan;

// Re-export commonly used types
pub use classify::{classify_char, is_word_char, CharClass};
pub use motions::{paragraph_backward, paragraph_forward, word_backward, word_forward, Motion};
pub use scan::{BackwardPhase, ForwardState, WordBackwardScan, WordForwardScan};

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
