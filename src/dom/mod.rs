//! Rendered document capability
//!
//! The engine never owns the document. Hosts expose their tree, its computed
//! layout and a hit test through [`Document`]; motions only read from it.

//! ## dom/ Invariants
//!
//! - A [`TextPosition`] is only meaningful while its node is in the document.
//! - Offsets count Unicode scalar values and lie in `[0, len]`.
//! - Visibility is re-evaluated on every walk; nothing is cached.
//! - Document order is the order of `next_text_node` / `prev_text_node`.

pub mod block;
pub mod walker;

pub use block::{block_ancestor, block_of};
pub use walker::{is_walkable, TextWalker};

/// Opaque handle to a node of the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Whether a node is a container or a text leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
}

/// Computed CSS `display` of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    None,
    Block,
    Inline,
    InlineBlock,
    InlineFlex,
    InlineGrid,
    InlineTable,
    Contents,
    Ruby,
    RubyText,
    RubyBase,
    RubyTextContainer,
    RubyBaseContainer,
    Flex,
    Grid,
    ListItem,
    Table,
    TableCell,
    /// Any other keyword; treated as block-level
    Other,
}

impl DisplayType {
    /// Parse a computed `display` keyword
    #[must_use]
    pub fn from_css(keyword: &str) -> Self {
        match keyword.trim() {
            "none" => DisplayType::None,
            "block" | "flow-root" => DisplayType::Block,
            "inline" => DisplayType::Inline,
            "inline-block" => DisplayType::InlineBlock,
            "inline-flex" => DisplayType::InlineFlex,
            "inline-grid" => DisplayType::InlineGrid,
            "inline-table" => DisplayType::InlineTable,
            "contents" => DisplayType::Contents,
            "ruby" => DisplayType::Ruby,
            "ruby-text" => DisplayType::RubyText,
            "ruby-base" => DisplayType::RubyBase,
            "ruby-text-container" => DisplayType::RubyTextContainer,
            "ruby-base-container" => DisplayType::RubyBaseContainer,
            "flex" => DisplayType::Flex,
            "grid" => DisplayType::Grid,
            "list-item" => DisplayType::ListItem,
            "table" => DisplayType::Table,
            "table-cell" => DisplayType::TableCell,
            _ => DisplayType::Other,
        }
    }

    /// Inline-level values are skipped when looking for a paragraph container
    #[must_use]
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            DisplayType::Inline
                | DisplayType::InlineBlock
                | DisplayType::InlineFlex
                | DisplayType::InlineGrid
                | DisplayType::InlineTable
                | DisplayType::Contents
                | DisplayType::Ruby
                | DisplayType::RubyText
                | DisplayType::RubyBase
                | DisplayType::RubyTextContainer
                | DisplayType::RubyBaseContainer
        )
    }
}

/// Location immediately before the character at `offset` in `node`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextPosition {
    pub node: NodeId,
    pub offset: usize,
}

impl TextPosition {
    #[must_use]
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Read-only view of a rendered document
pub trait Document {
    /// Root content container (the `<body>` equivalent)
    fn root(&self) -> NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn kind(&self, node: NodeId) -> NodeKind;

    /// Lowercase tag name of an element, `None` for text nodes
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    /// Text content of a text node, `None` for elements
    fn text(&self, node: NodeId) -> Option<&str>;

    /// Computed display of an element
    fn display(&self, node: NodeId) -> DisplayType;

    /// Whether the element currently generates a layout box
    /// (the `offsetParent != null` check of a browser)
    fn has_layout_box(&self, node: NodeId) -> bool;

    /// Next text node after `node` in document order, unfiltered
    fn next_text_node(&self, node: NodeId) -> Option<NodeId>;

    /// Previous text node before `node` in document order, unfiltered
    fn prev_text_node(&self, node: NodeId) -> Option<NodeId>;

    /// Top edge of the element's bounding box relative to the viewport
    fn bounding_top(&self, node: NodeId) -> f64;

    /// Text position under a viewport point, if any text is rendered near it
    fn text_position_at_point(&self, x: f64, y: f64) -> Option<TextPosition>;

    fn is_text(&self, node: NodeId) -> bool {
        self.kind(node) == NodeKind::Text
    }

    /// Length of a text node in characters (0 for elements)
    fn text_len(&self, node: NodeId) -> usize {
        self.text(node).map_or(0, |t| t.chars().count())
    }

    fn char_at(&self, node: NodeId, offset: usize) -> Option<char> {
        self.text(node).and_then(|t| t.chars().nth(offset))
    }
}
