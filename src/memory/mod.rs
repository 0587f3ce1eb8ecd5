//! In-memory rendered document
//!
//! A small stand-in for a browser page: an element/text tree with computed
//! display values, a one-line-per-text-node layout, a selection and a
//! scrollable viewport. Tests, benches and the terminal host drive the engine
//! through it.

//! ## memory/ Invariants
//!
//! - Node ids are allocated in document (pre-)order, so comparing ids compares
//!   document positions.
//! - Node 0 is the root `body` element.
//! - Every text node occupies exactly one line of `line_height`; hidden
//!   subtrees take no space.

use crate::constants::dom::{EDITABLE_TAGS, SKIPPED_TAGS};
use crate::dom::{is_walkable, DisplayType, Document, NodeId, NodeKind, TextPosition};
use crate::scroll::{ScrollBehavior, ScrollSurface};
use crate::selection::SelectionSurface;

const DEFAULT_LINE_HEIGHT: f64 = 20.0;
const DEFAULT_CHAR_WIDTH: f64 = 8.0;
const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        display: DisplayType,
        content_editable: bool,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    data: NodeData,
    /// Layout top in document coordinates
    top: f64,
}

/// A recorded scroll request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub dy: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    /// Text nodes in document order
    texts: Vec<NodeId>,
    /// (anchor, focus)
    selection: Option<(TextPosition, TextPosition)>,
    focused: Option<NodeId>,
    line_height: f64,
    char_width: f64,
    viewport_height: f64,
    content_height: f64,
    scroll_y: f64,
    scrolls: Vec<ScrollRequest>,
}

impl MemoryDocument {
    /// Build a document from plain text
    ///
    /// Paragraphs are separated by blank lines and become `<p>` blocks with one
    /// text node per source line. Each line keeps a trailing newline so words
    /// never run together across lines. Layout uses one unit per line and per
    /// column, matching a terminal grid.
    #[must_use]
    pub fn from_plain_text(text: &str) -> Self {
        let mut paragraphs: Vec<Vec<&str>> = vec![Vec::new()];
        for line in text.lines() {
            if line.trim().is_empty() {
                if paragraphs.last().is_some_and(|p| !p.is_empty()) {
                    paragraphs.push(Vec::new());
                }
            } else if let Some(current) = paragraphs.last_mut() {
                current.push(line);
            }
        }
        paragraphs.retain(|p| !p.is_empty());

        let mut builder = DocumentBuilder::new()
            .with_line_height(1.0)
            .with_char_width(1.0);
        for (i, lines) in paragraphs.iter().enumerate() {
            if i > 0 {
                builder.spacer();
            }
            builder.block("p", |p| {
                for line in lines {
                    p.text(format!("{line}\n"));
                }
            });
        }
        builder.build()
    }

    /// Text nodes in document order (hidden ones included)
    #[must_use]
    pub fn text_nodes(&self) -> &[NodeId] {
        &self.texts
    }

    /// First text node whose content contains `needle`
    #[must_use]
    pub fn find_text(&self, needle: &str) -> Option<NodeId> {
        self.texts
            .iter()
            .copied()
            .find(|&id| self.text(id).is_some_and(|t| t.contains(needle)))
    }

    /// Position of the first occurrence of `needle`, offset in characters
    #[must_use]
    pub fn position_of(&self, needle: &str) -> Option<TextPosition> {
        let node = self.find_text(needle)?;
        let text = self.text(node)?;
        let byte = text.find(needle)?;
        Some(TextPosition::new(node, text[..byte].chars().count()))
    }

    /// Raw (anchor, focus) pair
    #[must_use]
    pub fn selection(&self) -> Option<(TextPosition, TextPosition)> {
        self.selection
    }

    /// Selection ends ordered by document position
    #[must_use]
    pub fn selection_range(&self) -> Option<(TextPosition, TextPosition)> {
        self.selection.map(|(a, f)| ordered(a, f))
    }

    /// Whether the character at `offset` of `node` is inside the selection
    #[must_use]
    pub fn is_selected(&self, node: NodeId, offset: usize) -> bool {
        let Some((start, end)) = self.selection_range() else {
            return false;
        };
        let here = key(TextPosition::new(node, offset));
        key(start) <= here && here < key(end)
    }

    pub fn focus_element(&mut self, element: Option<NodeId>) {
        self.focused = element;
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Scroll requests received so far
    #[must_use]
    pub fn scrolls(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Layout top of a node in document coordinates
    #[must_use]
    pub fn layout_top(&self, node: NodeId) -> f64 {
        self.nodes[node.0].top
    }

    fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn is_content_editable(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if let NodeData::Element {
                content_editable: true,
                ..
            } = self.nodes[id.0].data
            {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// Characters of `node` in `[from, to)`
    fn slice(&self, node: NodeId, from: usize, to: usize) -> String {
        self.text(node)
            .map(|t| t.chars().skip(from).take(to.saturating_sub(from)).collect())
            .unwrap_or_default()
    }
}

fn key(pos: TextPosition) -> (usize, usize) {
    (pos.node.0, pos.offset)
}

fn ordered(a: TextPosition, b: TextPosition) -> (TextPosition, TextPosition) {
    if key(a) <= key(b) {
        (a, b)
    } else {
        (b, a)
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn kind(&self, node: NodeId) -> NodeKind {
        match self.nodes[node.0].data {
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
        }
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node.0)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node.0)?.data {
            NodeData::Text(text) => Some(text),
            NodeData::Element { .. } => None,
        }
    }

    fn display(&self, node: NodeId) -> DisplayType {
        match self.nodes[node.0].data {
            NodeData::Element { display, .. } => display,
            NodeData::Text(_) => DisplayType::Inline,
        }
    }

    fn has_layout_box(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.display(id) == DisplayType::None {
                return false;
            }
            current = self.nodes[id.0].parent;
        }
        true
    }

    fn next_text_node(&self, node: NodeId) -> Option<NodeId> {
        let idx = self.texts.partition_point(|t| t.0 <= node.0);
        self.texts.get(idx).copied()
    }

    fn prev_text_node(&self, node: NodeId) -> Option<NodeId> {
        let idx = self.texts.partition_point(|t| t.0 < node.0);
        idx.checked_sub(1).map(|i| self.texts[i])
    }

    fn bounding_top(&self, node: NodeId) -> f64 {
        self.nodes[node.0].top - self.scroll_y
    }

    fn text_position_at_point(&self, x: f64, y: f64) -> Option<TextPosition> {
        let doc_y = y + self.scroll_y;
        let mut closest: Option<(f64, NodeId)> = None;

        for &id in &self.texts {
            let Some(parent) = self.parent(id) else {
                continue;
            };
            if !self.has_layout_box(parent)
                || self
                    .tag_name(parent)
                    .is_some_and(|tag| SKIPPED_TAGS.contains(&tag))
                || self.text(id).is_some_and(|t| t.trim().is_empty())
            {
                continue;
            }
            let top = self.nodes[id.0].top;
            let bottom = top + self.line_height;
            let right = self.text_len(id) as f64 * self.char_width;
            let dx = (0.0 - x).max(0.0).max(x - right);
            let dy = (top - doc_y).max(0.0).max(doc_y - bottom);
            let distance = (dx * dx + dy * dy).sqrt();
            if closest.is_none_or(|(best, _)| distance < best) {
                closest = Some((distance, id));
            }
        }

        let (_, node) = closest?;
        let column = (x / self.char_width).floor().max(0.0) as usize;
        let offset = column.min(self.text_len(node).saturating_sub(1));
        Some(TextPosition::new(node, offset))
    }
}

impl SelectionSurface for MemoryDocument {
    fn anchor(&self) -> Option<TextPosition> {
        self.selection.map(|(a, _)| a)
    }

    fn focus(&self) -> Option<TextPosition> {
        self.selection.map(|(_, f)| f)
    }

    fn set_selection(&mut self, anchor: TextPosition, focus: TextPosition) {
        self.selection = Some((anchor, focus));
    }

    fn extend(&mut self, focus: TextPosition) {
        if let Some((anchor, _)) = self.selection {
            self.selection = Some((anchor, focus));
        }
    }

    fn collapse_to_start(&mut self) {
        if let Some((start, _)) = self.selection_range() {
            self.selection = Some((start, start));
        }
    }

    fn collapse_to_end(&mut self) {
        if let Some((_, end)) = self.selection_range() {
            self.selection = Some((end, end));
        }
    }

    fn clear(&mut self) {
        self.selection = None;
    }

    fn selected_text(&self) -> String {
        let Some((start, end)) = self.selection_range() else {
            return String::new();
        };
        if start.node == end.node {
            return self.slice(start.node, start.offset, end.offset);
        }

        let mut out = self.slice(start.node, start.offset, usize::MAX);
        for &id in &self.texts {
            if id.0 > start.node.0 && id.0 < end.node.0 && is_walkable(self, id) {
                out.push_str(self.text(id).unwrap_or_default());
            }
        }
        out.push_str(&self.slice(end.node, 0, end.offset));
        out
    }

    fn is_editable_focused(&self) -> bool {
        let Some(id) = self.focused else {
            return false;
        };
        self.tag_name(id)
            .is_some_and(|tag| EDITABLE_TAGS.contains(&tag))
            || self.is_content_editable(id)
    }
}

impl ScrollSurface for MemoryDocument {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_by(&mut self, dy: f64, behavior: ScrollBehavior) {
        self.scrolls.push(ScrollRequest { dy, behavior });
        self.scroll_y = (self.scroll_y + dy).clamp(0.0, self.max_scroll());
    }
}

/// Builds a [`MemoryDocument`] depth-first
///
/// ```
/// use readwalk::dom::DisplayType;
/// use readwalk::memory::DocumentBuilder;
///
/// let mut b = DocumentBuilder::new();
/// b.block("p", |p| {
///     p.text("Some ");
///     p.element("a", DisplayType::Inline, |a| {
///         a.text("linked");
///     });
///     p.text(" words");
/// });
/// let doc = b.build();
/// assert_eq!(doc.text_nodes().len(), 3);
/// ```
pub struct DocumentBuilder {
    doc: MemoryDocument,
    stack: Vec<NodeId>,
    y: f64,
    hidden_depth: usize,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            data: NodeData::Element {
                tag: "body".to_string(),
                display: DisplayType::Block,
                content_editable: false,
            },
            top: 0.0,
        };
        Self {
            doc: MemoryDocument {
                nodes: vec![root],
                texts: Vec::new(),
                selection: None,
                focused: None,
                line_height: DEFAULT_LINE_HEIGHT,
                char_width: DEFAULT_CHAR_WIDTH,
                viewport_height: DEFAULT_VIEWPORT_HEIGHT,
                content_height: 0.0,
                scroll_y: 0.0,
                scrolls: Vec::new(),
            },
            stack: vec![NodeId(0)],
            y: 0.0,
            hidden_depth: 0,
        }
    }

    #[must_use]
    pub fn with_line_height(mut self, height: f64) -> Self {
        self.doc.line_height = height;
        self
    }

    #[must_use]
    pub fn with_char_width(mut self, width: f64) -> Self {
        self.doc.char_width = width;
        self
    }

    #[must_use]
    pub fn with_viewport_height(mut self, height: f64) -> Self {
        self.doc.viewport_height = height;
        self
    }

    fn current_parent(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId(0))
    }

    fn push_element(
        &mut self,
        tag: &str,
        display: DisplayType,
        content_editable: bool,
        children: impl FnOnce(&mut Self),
    ) -> NodeId {
        let id = NodeId(self.doc.nodes.len());
        self.doc.nodes.push(Node {
            parent: Some(self.current_parent()),
            data: NodeData::Element {
                tag: tag.to_ascii_lowercase(),
                display,
                content_editable,
            },
            top: self.y,
        });
        let hidden = display == DisplayType::None;
        if hidden {
            self.hidden_depth += 1;
        }
        self.stack.push(id);
        children(self);
        self.stack.pop();
        if hidden {
            self.hidden_depth -= 1;
        }
        id
    }

    /// Element with an explicit computed display
    pub fn element(
        &mut self,
        tag: &str,
        display: DisplayType,
        children: impl FnOnce(&mut Self),
    ) -> NodeId {
        self.push_element(tag, display, false, children)
    }

    pub fn block(&mut self, tag: &str, children: impl FnOnce(&mut Self)) -> NodeId {
        self.element(tag, DisplayType::Block, children)
    }

    pub fn inline(&mut self, tag: &str, children: impl FnOnce(&mut Self)) -> NodeId {
        self.element(tag, DisplayType::Inline, children)
    }

    /// `display: none` subtree
    pub fn hidden(&mut self, tag: &str, children: impl FnOnce(&mut Self)) -> NodeId {
        self.element(tag, DisplayType::None, children)
    }

    /// Block marked content-editable
    pub fn editable(&mut self, tag: &str, children: impl FnOnce(&mut Self)) -> NodeId {
        self.push_element(tag, DisplayType::Block, true, children)
    }

    /// Text leaf under the current element, laid out on its own line
    pub fn text(&mut self, text: impl Into<String>) -> NodeId {
        let id = NodeId(self.doc.nodes.len());
        self.doc.nodes.push(Node {
            parent: Some(self.current_parent()),
            data: NodeData::Text(text.into()),
            top: self.y,
        });
        self.doc.texts.push(id);
        if self.hidden_depth == 0 {
            self.y += self.doc.line_height;
        }
        id
    }

    /// Leave one empty line
    pub fn spacer(&mut self) {
        self.y += self.doc.line_height;
    }

    #[must_use]
    pub fn build(mut self) -> MemoryDocument {
        self.doc.content_height = self.y;
        self.doc
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
