//! In-memory host document
//!
//! A small arena tree standing in for the editor's document model. It offers
//! exactly the primitives the grid engine needs:
//! - node creation, insertion, moving and removal
//! - attribute get/set/remove
//! - deep cloning
//! - positions, ranges and selections
//! - atomic change scopes with rollback on error
//!
//! # Example
//!
//! ```
//! use bsgrid::core::model::{Document, NodeKind, Attributes};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let grid = doc
//!     .change(|scope| {
//!         let grid = scope.create_element(NodeKind::Grid, Attributes::new());
//!         scope.append(grid, root)?;
//!         Ok(grid)
//!     })
//!     .unwrap();
//! assert_eq!(doc.parent(grid), Some(root));
//! ```

mod document;
mod node;
mod position;
mod scope;

pub use document::Document;
pub use node::{AttributeValue, Attributes, NodeId, NodeKind};
pub use position::{InsertAt, Position, Range, Selection};
pub use scope::ChangeScope;

/// Build an attribute bag from `(key, value)` pairs
pub fn attributes<K, V, I>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<AttributeValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GridError;
    use std::cmp::Ordering;

    fn paragraph_with(scope: &mut ChangeScope<'_>, text: &str) -> NodeId {
        let paragraph = scope.create_element(NodeKind::Paragraph, Attributes::new());
        let leaf = scope.create_text(text);
        scope.append(leaf, paragraph).unwrap();
        paragraph
    }

    #[test]
    fn test_insert_and_read_back() {
        let mut doc = Document::new();
        let root = doc.root();
        let (a, b) = doc
            .change(|scope| {
                let a = paragraph_with(scope, "a");
                let b = paragraph_with(scope, "b");
                scope.append(b, root)?;
                scope.insert(a, Position::new(root, 0))?;
                Ok((a, b))
            })
            .unwrap();

        assert_eq!(doc.children(root), &[a, b]);
        assert_eq!(doc.index_of(b), Some(1));
        assert_eq!(doc.text_content(root), "ab");
        assert_eq!(doc.position_after(a), Some(Position::new(root, 1)));
    }

    #[test]
    fn test_insert_rejects_bad_offset() {
        let mut doc = Document::new();
        let root = doc.root();
        let err = doc
            .change(|scope| {
                let p = scope.create_element(NodeKind::Paragraph, Attributes::new());
                scope.insert(p, Position::new(root, 3))
            })
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_failed_change_rolls_back() {
        let mut doc = Document::new();
        let root = doc.root();
        let result: Result<(), GridError> = doc.change(|scope| {
            let p = scope.create_element(NodeKind::Paragraph, Attributes::new());
            scope.append(p, root)?;
            scope.set_attribute(root, "marker", 1);
            Err(GridError::invalid("abort"))
        });

        assert!(result.is_err());
        assert_eq!(doc.child_count(root), 0);
        assert!(doc.get_attribute(root, "marker").is_none());
        assert_eq!(doc.node_count(), 1);
    }

    #[test]
    fn test_move_forward_within_parent() {
        let mut doc = Document::new();
        let root = doc.root();
        let ids = doc
            .change(|scope| {
                let ids: Vec<NodeId> = ["a", "b", "c"]
                    .iter()
                    .map(|t| paragraph_with(scope, t))
                    .collect();
                for &id in &ids {
                    scope.append(id, root)?;
                }
                let range = Range::on(scope, ids[0]).unwrap();
                scope.move_node(range, Position::new(root, 3))?;
                Ok(ids)
            })
            .unwrap();

        assert_eq!(doc.children(root), &[ids[1], ids[2], ids[0]]);
        assert_eq!(doc.text_content(root), "bca");
    }

    #[test]
    fn test_clone_is_deep_and_detached() {
        let mut doc = Document::new();
        let root = doc.root();
        let (original, copy) = doc
            .change(|scope| {
                let original = paragraph_with(scope, "deep");
                scope.set_attribute(original, "colspan", 2);
                scope.append(original, root)?;
                let copy = scope.clone_element(original);
                Ok((original, copy))
            })
            .unwrap();

        assert_ne!(original, copy);
        assert_eq!(doc.parent(copy), None);
        assert_eq!(doc.text_content(copy), "deep");
        assert_eq!(doc.numeric_attribute(copy, "colspan", 1), 2);
        assert_ne!(doc.children(copy), doc.children(original));
    }

    #[test]
    fn test_insert_into_own_descendant_fails() {
        let mut doc = Document::new();
        let err = doc
            .change(|scope| {
                let outer = scope.create_element(NodeKind::Grid, Attributes::new());
                let inner = scope.create_element(NodeKind::Row, Attributes::new());
                scope.append(inner, outer)?;
                scope.remove(inner)?;
                scope.append(outer, inner)?;
                scope.append(inner, outer)
            })
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument { .. }));
    }

    #[test]
    fn test_compare_positions_in_document_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let (a, b) = doc
            .change(|scope| {
                let a = paragraph_with(scope, "a");
                let b = paragraph_with(scope, "b");
                scope.append(a, root)?;
                scope.append(b, root)?;
                Ok((a, b))
            })
            .unwrap();

        let inside_a = Position::new(a, 0);
        let before_b = doc.position_before(b).unwrap();
        assert_eq!(doc.compare_positions(&inside_a, &before_b), Ordering::Less);
        assert_eq!(doc.compare_positions(&before_b, &inside_a), Ordering::Greater);
        assert_eq!(doc.compare_positions(&before_b, &before_b), Ordering::Equal);
    }

    #[test]
    fn test_numeric_attribute_parses_text() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.change(|scope| {
            scope.set_attribute(root, "rowspan", "3");
            scope.set_attribute(root, "bad", "three");
            Ok(())
        })
        .unwrap();
        assert_eq!(doc.numeric_attribute(root, "rowspan", 1), 3);
        assert_eq!(doc.numeric_attribute(root, "bad", 1), 1);
        assert_eq!(doc.numeric_attribute(root, "missing", 7), 7);
    }

    #[test]
    fn test_attributes_helper_keeps_order() {
        let attrs = attributes([("rowspan", 2usize), ("colspan", 3usize)]);
        let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["rowspan", "colspan"]);
    }
}
