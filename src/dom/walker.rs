//! Filtered bidirectional walk over visible text nodes

use super::{Document, NodeId};
use crate::constants::dom::SKIPPED_TAGS;

/// Whether a text node takes part in motions
///
/// The parent element must be laid out and must not be a script-like container.
pub fn is_walkable<D: Document + ?Sized>(doc: &D, node: NodeId) -> bool {
    if !doc.is_text(node) {
        return false;
    }
    let Some(parent) = doc.parent(node) else {
        return false;
    };
    if !doc.has_layout_box(parent) {
        return false;
    }
    match doc.tag_name(parent) {
        Some(tag) => !SKIPPED_TAGS.contains(&tag),
        None => true,
    }
}

/// Tree walker over walkable text nodes, seeded at any node
///
/// Like a DOM `TreeWalker`, a step that finds nothing leaves the current
/// node where it was.
pub struct TextWalker<'a, D: Document + ?Sized> {
    doc: &'a D,
    current: NodeId,
}

impl<'a, D: Document + ?Sized> TextWalker<'a, D> {
    pub fn new(doc: &'a D, current: NodeId) -> Self {
        Self { doc, current }
    }

    /// Walker positioned before the first text node of the document
    pub fn at_root(doc: &'a D) -> Self {
        Self::new(doc, doc.root())
    }

    #[must_use]
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn set_current(&mut self, node: NodeId) {
        self.current = node;
    }

    pub fn next_node(&mut self) -> Option<NodeId> {
        let mut node = self.current;
        loop {
            node = self.doc.next_text_node(node)?;
            if is_walkable(self.doc, node) {
                self.current = node;
                return Some(node);
            }
        }
    }

    pub fn previous_node(&mut self) -> Option<NodeId> {
        let mut node = self.current;
        loop {
            node = self.doc.prev_text_node(node)?;
            if is_walkable(self.doc, node) {
                self.current = node;
                return Some(node);
            }
        }
    }
}
