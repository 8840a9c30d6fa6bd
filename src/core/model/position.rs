//! Positions, ranges and selections over the document tree

use super::document::Document;
use super::node::NodeId;

/// Offset inside a parent, used when creating positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    /// Before the child at this index
    Index(usize),
    /// After the last child
    End,
}

impl From<usize> for InsertAt {
    fn from(index: usize) -> Self {
        InsertAt::Index(index)
    }
}

/// A location between two children of `parent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub parent: NodeId,
    pub offset: usize,
}

impl Position {
    pub fn new(parent: NodeId, offset: usize) -> Self {
        Position { parent, offset }
    }

    /// The node directly after this position, if any
    pub fn node_after(&self, doc: &Document) -> Option<NodeId> {
        doc.child(self.parent, self.offset)
    }
}

/// A pair of positions; `start` is never after `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    /// A collapsed range (caret) at `position`
    pub fn collapsed(position: Position) -> Self {
        Range {
            start: position,
            end: position,
        }
    }

    /// The range wrapping exactly `node`; `None` for a detached top node
    pub fn on(doc: &Document, node: NodeId) -> Option<Self> {
        let start = doc.position_before(node)?;
        Some(Range {
            start,
            end: Position::new(start.parent, start.offset + 1),
        })
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// The single node this range wraps, if it wraps exactly one
    pub fn contained_element(&self, doc: &Document) -> Option<NodeId> {
        if self.start.parent == self.end.parent && self.end.offset == self.start.offset + 1 {
            self.start.node_after(doc)
        } else {
            None
        }
    }
}

/// An ordered set of ranges, as produced by the host editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<Range>,
}

impl Selection {
    pub fn new(ranges: Vec<Range>) -> Self {
        Selection { ranges }
    }

    /// Caret selection at `position`
    pub fn caret(position: Position) -> Self {
        Selection::new(vec![Range::collapsed(position)])
    }

    /// Selection wrapping each of `nodes` in its own range
    pub fn on_nodes(doc: &Document, nodes: &[NodeId]) -> Self {
        Selection::new(nodes.iter().filter_map(|&n| Range::on(doc, n)).collect())
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn push(&mut self, range: Range) {
        self.ranges.push(range);
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
