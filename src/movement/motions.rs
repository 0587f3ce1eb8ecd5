//! Word and paragraph motions over a rendered document
//!
//! Motions report a target and never mutate the selection; the caller applies it.

use super::classify::is_word_char;
use super::scan::{WordBackwardScan, WordForwardScan};
use crate::dom::{block_of, Document, NodeId, TextPosition, TextWalker};

/// A navigation motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// `w`: start of the next word
    WordForward,
    /// `b`: start of the current or previous word
    WordBackward,
    /// `}`: first text of the next block
    ParagraphForward,
    /// `{`: first text of the previous block
    ParagraphBackward,
}

impl Motion {
    /// Motion bound to an unmodified key
    #[must_use]
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            'w' => Some(Motion::WordForward),
            'b' => Some(Motion::WordBackward),
            '}' => Some(Motion::ParagraphForward),
            '{' => Some(Motion::ParagraphBackward),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(self) -> char {
        match self {
            Motion::WordForward => 'w',
            Motion::WordBackward => 'b',
            Motion::ParagraphForward => '}',
            Motion::ParagraphBackward => '{',
        }
    }

    /// Backward motions start from the beginning of a Normal-mode cursor
    #[must_use]
    pub fn is_backward(self) -> bool {
        matches!(self, Motion::WordBackward | Motion::ParagraphBackward)
    }

    /// Find the target of this motion from `start`
    pub fn find<D: Document + ?Sized>(
        self,
        doc: &D,
        start: TextPosition,
        max_nodes: usize,
    ) -> Option<TextPosition> {
        let target = match self {
            Motion::WordForward => word_forward(doc, start, max_nodes),
            Motion::WordBackward => word_backward(doc, start, max_nodes),
            Motion::ParagraphForward => paragraph_forward(doc, start, max_nodes),
            Motion::ParagraphBackward => paragraph_backward(doc, start, max_nodes),
        };
        if target.is_none() {
            tracing::trace!(motion = %self.key(), ?start, "motion found no target");
        }
        target
    }
}

/// `w`: position of the first character of the next word
///
/// The first node is scanned from `start.offset`, later nodes from 0.
pub fn word_forward<D: Document + ?Sized>(
    doc: &D,
    start: TextPosition,
    max_nodes: usize,
) -> Option<TextPosition> {
    let mut scan = if doc.is_text(start.node) {
        WordForwardScan::starting_on(doc.char_at(start.node, start.offset))
    } else {
        WordForwardScan::outside_word()
    };

    let mut walker = TextWalker::new(doc, start.node);
    let mut node = Some(start.node);
    let mut checked = 0;

    while let Some(current) = node {
        if checked >= max_nodes {
            return None;
        }
        checked += 1;

        if let Some(text) = doc.text(current) {
            let from = if current == start.node { start.offset } else { 0 };
            for (i, c) in text.chars().enumerate().skip(from) {
                if scan.step(is_word_char(c)) {
                    return Some(TextPosition::new(current, i));
                }
            }
        }
        node = walker.next_node();
    }
    None
}

/// `b`: position of the first character of the word behind the cursor
///
/// Looks strictly before `start`. A cursor in the middle of a word lands on
/// that word's start.
pub fn word_backward<D: Document + ?Sized>(
    doc: &D,
    start: TextPosition,
    max_nodes: usize,
) -> Option<TextPosition> {
    let mut scan = WordBackwardScan::new();
    let mut walker = TextWalker::new(doc, start.node);
    let mut node = start.node;
    let mut end = Some(start.offset);
    let mut checked = 0;

    while checked < max_nodes {
        if let Some(text) = doc.text(node) {
            let chars: Vec<char> = text.chars().collect();
            let upto = end.map_or(chars.len(), |e| e.min(chars.len()));
            for i in (0..upto).rev() {
                if let Some(found) = scan.step(is_word_char(chars[i]), TextPosition::new(node, i))
                {
                    return Some(found);
                }
            }
        }

        checked += 1;
        match walker.previous_node() {
            Some(prev) => {
                node = prev;
                end = None;
            }
            None => break,
        }
    }
    scan.finish()
}

/// `}`: offset 0 of the first text node outside the starting block
pub fn paragraph_forward<D: Document + ?Sized>(
    doc: &D,
    start: TextPosition,
    max_nodes: usize,
) -> Option<TextPosition> {
    let start_block = block_of(doc, start.node);
    let mut walker = TextWalker::new(doc, start.node);

    for _ in 0..max_nodes {
        let node = walker.next_node()?;
        if block_of(doc, node) != start_block {
            return Some(TextPosition::new(node, 0));
        }
    }
    None
}

/// `{`: offset 0 of the first text node of the previous block
///
/// Walks back to the first block that differs from the starting one, then
/// keeps walking while still inside it so the earliest node wins.
pub fn paragraph_backward<D: Document + ?Sized>(
    doc: &D,
    start: TextPosition,
    max_nodes: usize,
) -> Option<TextPosition> {
    let start_block = block_of(doc, start.node);
    let mut walker = TextWalker::new(doc, start.node);
    let mut target: Option<(NodeId, NodeId)> = None;

    for _ in 0..max_nodes {
        let Some(node) = walker.previous_node() else {
            break;
        };
        let block = block_of(doc, node);
        if block == start_block {
            continue;
        }
        match target {
            None => target = Some((block, node)),
            Some((target_block, _)) if target_block == block => {
                target = Some((target_block, node));
            }
            Some(_) => break,
        }
    }
    target.map(|(_, node)| TextPosition::new(node, 0))
}
