//! Node kinds and attribute values of the document tree

use indexmap::IndexMap;
use std::fmt;

/// Handle to a node owned by a [`Document`](super::Document)
///
/// Handles stay valid for the lifetime of the document: removed nodes are
/// detached from the tree, never freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of this node
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of node kinds the grid model knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root
    Root,
    /// Whole responsive grid (owns rows)
    Grid,
    /// Horizontal band of cells
    Row,
    /// Rectangular region spanning 1+ rows/columns
    Cell,
    /// The single content container of a cell
    Content,
    /// Block of text inside cell content
    Paragraph,
    /// Text leaf
    Text(String),
    /// Non-row metadata child of a grid
    Caption,
}

impl NodeKind {
    /// Model name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Grid => "grid",
            NodeKind::Row => "row",
            NodeKind::Cell => "cell",
            NodeKind::Content => "content",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text(_) => "$text",
            NodeKind::Caption => "caption",
        }
    }

    pub fn is_grid(&self) -> bool {
        matches!(self, NodeKind::Grid)
    }

    pub fn is_row(&self) -> bool {
        matches!(self, NodeKind::Row)
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, NodeKind::Cell)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute value stored on a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Number(usize),
    Text(String),
}

impl AttributeValue {
    /// Numeric view of the value; text values are parsed
    pub fn as_number(&self) -> Option<usize> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Text view of the value, if it is stored as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<usize> for AttributeValue {
    fn from(value: usize) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// Insertion-ordered attribute bag
pub type Attributes = IndexMap<String, AttributeValue>;

/// Arena slot of a single node
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) attributes: Attributes,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind, attributes: Attributes) -> Self {
        NodeData {
            kind,
            attributes,
            parent: None,
            children: Vec::new(),
        }
    }
}
