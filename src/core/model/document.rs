//! Arena-backed document tree
//!
//! The document owns every node. Reading goes through `&Document`; all
//! mutation goes through a [`ChangeScope`] opened with [`Document::change`],
//! which applies the changes atomically: if the closure fails, the document
//! is restored to the state it had when the scope was opened.

use std::cmp::Ordering;

use super::node::{AttributeValue, Attributes, NodeData, NodeId, NodeKind};
use super::position::{InsertAt, Position};
use super::scope::ChangeScope;
use crate::utils::error::GridResult;

/// The host document tree
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) nodes: Vec<NodeData>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only its root node
    pub fn new() -> Self {
        Document {
            nodes: vec![NodeData::new(NodeKind::Root, Attributes::new())],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes ever allocated (attached or not)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0]
    }

    pub(crate) fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.data(node).kind
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.data(node).children
    }

    pub fn child(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.data(node).children.get(index).copied()
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.data(node).children.len()
    }

    /// Index of `node` among its parent's children
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.children(parent).iter().position(|&c| c == node)
    }

    pub fn attributes(&self, node: NodeId) -> &Attributes {
        &self.data(node).attributes
    }

    pub fn get_attribute(&self, node: NodeId, key: &str) -> Option<&AttributeValue> {
        self.data(node).attributes.get(key)
    }

    /// Numeric attribute value, or `default` when unset or not numeric
    pub fn numeric_attribute(&self, node: NodeId, key: &str, default: usize) -> usize {
        self.get_attribute(node, key)
            .and_then(AttributeValue::as_number)
            .unwrap_or(default)
    }

    /// First node, starting with `node` itself and walking up, whose kind matches
    pub fn find_ancestor(
        &self,
        node: NodeId,
        predicate: impl Fn(&NodeKind) -> bool,
    ) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if predicate(self.kind(id)) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// Row children of `grid`, skipping metadata children
    pub fn rows(&self, grid: NodeId) -> Vec<NodeId> {
        self.children(grid)
            .iter()
            .copied()
            .filter(|&c| self.kind(c).is_row())
            .collect()
    }

    /// Concatenated text of all text leaves below `node`
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        if let NodeKind::Text(text) = self.kind(node) {
            out.push_str(text);
        }
        for &child in self.children(node) {
            self.collect_text(child, out);
        }
    }

    /// Whether `node` is reachable from the document root
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.top_ancestor(node) == self.root
    }

    fn top_ancestor(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        std::iter::successors(Some(node), |&n| self.parent(n)).any(|n| n == ancestor)
    }

    /// Child indices leading from the top of the tree to `node`
    pub fn path(&self, node: NodeId) -> Vec<usize> {
        let mut path: Vec<usize> =
            std::iter::successors(Some(node), |&n| self.parent(n))
                .filter_map(|n| self.index_of(n))
                .collect();
        path.reverse();
        path
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Position inside `parent` at `at`
    pub fn position_at(&self, parent: NodeId, at: InsertAt) -> Position {
        let offset = match at {
            InsertAt::Index(i) => i,
            InsertAt::End => self.child_count(parent),
        };
        Position::new(parent, offset)
    }

    /// Position directly before `node`
    pub fn position_before(&self, node: NodeId) -> Option<Position> {
        let parent = self.parent(node)?;
        let offset = self.index_of(node)?;
        Some(Position::new(parent, offset))
    }

    /// Position directly after `node`
    pub fn position_after(&self, node: NodeId) -> Option<Position> {
        self.position_before(node)
            .map(|p| Position::new(p.parent, p.offset + 1))
    }

    /// Document order of two positions
    pub fn compare_positions(&self, a: &Position, b: &Position) -> Ordering {
        let mut path_a = self.path(a.parent);
        path_a.push(a.offset);
        let mut path_b = self.path(b.parent);
        path_b.push(b.offset);
        path_a.cmp(&path_b)
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Run `f` as one atomic change
    ///
    /// Every mutation made through the scope is kept when `f` returns `Ok`
    /// and rolled back when it returns `Err`.
    pub fn change<T, F>(&mut self, f: F) -> GridResult<T>
    where
        F: FnOnce(&mut ChangeScope<'_>) -> GridResult<T>,
    {
        let snapshot = self.clone();
        let result = {
            let mut scope = ChangeScope::new(self);
            f(&mut scope)
        };
        if let Err(ref err) = result {
            log::debug!("change scope failed, rolling back: {}", err);
            *self = snapshot;
        }
        result
    }
}
