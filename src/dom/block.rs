//! Nearest block-level container of a node

use super::{Document, NodeId};

/// Walk up from `element` past inline-level ancestors
///
/// Stops at the first element whose display is not inline-level, or at the
/// document root. A missing element resolves to the root.
pub fn block_ancestor<D: Document + ?Sized>(doc: &D, element: Option<NodeId>) -> NodeId {
    let root = doc.root();
    let mut current = element;
    while let Some(el) = current {
        if el == root {
            return root;
        }
        if !doc.display(el).is_inline() {
            return el;
        }
        current = doc.parent(el);
    }
    root
}

/// Block container of a text node (resolved from its parent element)
pub fn block_of<D: Document + ?Sized>(doc: &D, node: NodeId) -> NodeId {
    block_ancestor(doc, doc.parent(node))
}
