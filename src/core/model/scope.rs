//! Mutation scope over a [`Document`]

use std::ops::Deref;

use super::document::Document;
use super::node::{AttributeValue, Attributes, NodeData, NodeId, NodeKind};
use super::position::{Position, Range};
use crate::utils::error::{GridError, GridResult};

/// The only handle through which a document may be mutated
///
/// A scope is opened with [`Document::change`] and passed by `&mut` to every
/// function that needs to write. Reads go through `Deref<Target = Document>`.
pub struct ChangeScope<'a> {
    doc: &'a mut Document,
}

impl<'a> Deref for ChangeScope<'a> {
    type Target = Document;

    fn deref(&self) -> &Document {
        self.doc
    }
}

impl<'a> ChangeScope<'a> {
    pub(crate) fn new(doc: &'a mut Document) -> Self {
        ChangeScope { doc }
    }

    /// Create a detached element
    pub fn create_element(&mut self, kind: NodeKind, attributes: Attributes) -> NodeId {
        let id = NodeId(self.doc.nodes.len());
        self.doc.nodes.push(NodeData::new(kind, attributes));
        id
    }

    /// Create a detached text leaf
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.create_element(NodeKind::Text(text.into()), Attributes::new())
    }

    /// Insert a detached node at `position`
    pub fn insert(&mut self, node: NodeId, position: Position) -> GridResult<()> {
        if self.doc.parent(node).is_some() {
            return Err(GridError::invalid(format!(
                "node {} is already attached",
                node
            )));
        }
        if self.doc.contains(node, position.parent) {
            return Err(GridError::invalid(format!(
                "cannot insert node {} into itself",
                node
            )));
        }
        let count = self.doc.child_count(position.parent);
        if position.offset > count {
            return Err(GridError::out_of_range(
                "insert",
                format!(
                    "offset {} is past the {} children of {}",
                    position.offset, count, position.parent
                ),
            ));
        }

        self.doc
            .data_mut(position.parent)
            .children
            .insert(position.offset, node);
        self.doc.data_mut(node).parent = Some(position.parent);
        Ok(())
    }

    /// Insert a detached node as the last child of `parent`
    pub fn append(&mut self, node: NodeId, parent: NodeId) -> GridResult<()> {
        let position = Position::new(parent, self.doc.child_count(parent));
        self.insert(node, position)
    }

    /// Detach `node` from its parent; the node itself stays valid
    pub fn remove(&mut self, node: NodeId) -> GridResult<()> {
        let parent = self
            .doc
            .parent(node)
            .ok_or_else(|| GridError::invalid(format!("node {} is not attached", node)))?;
        self.doc.data_mut(parent).children.retain(|&c| c != node);
        self.doc.data_mut(node).parent = None;
        Ok(())
    }

    /// Move every node inside `range` to `target`
    ///
    /// `target` is interpreted against the tree before the move, so moving
    /// nodes forward inside their own parent lands them where expected.
    pub fn move_node(&mut self, range: Range, target: Position) -> GridResult<()> {
        if range.start.parent != range.end.parent {
            return Err(GridError::invalid("cannot move a range spanning several parents"));
        }
        let source = range.start.parent;
        let moved: Vec<NodeId> = (range.start.offset..range.end.offset)
            .filter_map(|i| self.doc.child(source, i))
            .collect();

        let mut offset = target.offset;
        if target.parent == source && offset > range.start.offset {
            offset = offset.saturating_sub(moved.len()).max(range.start.offset);
        }

        for &node in &moved {
            self.remove(node)?;
        }
        for (i, &node) in moved.iter().enumerate() {
            self.insert(node, Position::new(target.parent, offset + i))?;
        }
        Ok(())
    }

    pub fn set_attribute(&mut self, node: NodeId, key: &str, value: impl Into<AttributeValue>) {
        self.doc
            .data_mut(node)
            .attributes
            .insert(key.to_string(), value.into());
    }

    pub fn remove_attribute(&mut self, node: NodeId, key: &str) {
        self.doc.data_mut(node).attributes.shift_remove(key);
    }

    /// Deep copy of `node` (attributes and all descendants), detached
    pub fn clone_element(&mut self, node: NodeId) -> NodeId {
        let kind = self.doc.kind(node).clone();
        let attributes = self.doc.attributes(node).clone();
        let copy = self.create_element(kind, attributes);

        let children = self.doc.children(node).to_vec();
        for child in children {
            let child_copy = self.clone_element(child);
            self.doc.data_mut(copy).children.push(child_copy);
            self.doc.data_mut(child_copy).parent = Some(copy);
        }
        copy
    }
}
