//! Cell creation and attribute helpers shared by the structural edits

use crate::core::model::{Attributes, ChangeScope, NodeId, NodeKind, Position};
use crate::data::constants::{ATTR_COLSPAN, ATTR_ROWSPAN, DEFAULT_PLACEHOLDER_TEXT};
use crate::utils::error::GridResult;

/// Fills the content container of a freshly created cell
pub trait CellContent {
    /// Append the initial children of `content`
    fn fill(&self, scope: &mut ChangeScope<'_>, content: NodeId) -> GridResult<()>;
}

/// One paragraph holding placeholder text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderContent {
    pub text: String,
}

impl PlaceholderContent {
    pub fn new(text: impl Into<String>) -> Self {
        PlaceholderContent { text: text.into() }
    }
}

impl Default for PlaceholderContent {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_TEXT)
    }
}

impl CellContent for PlaceholderContent {
    fn fill(&self, scope: &mut ChangeScope<'_>, content: NodeId) -> GridResult<()> {
        let paragraph = scope.create_element(NodeKind::Paragraph, Attributes::new());
        if !self.text.is_empty() {
            let text = scope.create_text(self.text.as_str());
            scope.append(text, paragraph)?;
        }
        scope.append(paragraph, content)
    }
}

/// A single empty paragraph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyContent;

impl CellContent for EmptyContent {
    fn fill(&self, scope: &mut ChangeScope<'_>, content: NodeId) -> GridResult<()> {
        let paragraph = scope.create_element(NodeKind::Paragraph, Attributes::new());
        scope.append(paragraph, content)
    }
}

/// Create a cell with its content container and insert it at `position`
pub fn create_empty_cell(
    scope: &mut ChangeScope<'_>,
    position: Position,
    attributes: Attributes,
    content: &dyn CellContent,
) -> GridResult<NodeId> {
    let cell = scope.create_element(NodeKind::Cell, attributes);
    let container = scope.create_element(NodeKind::Content, Attributes::new());
    content.fill(scope, container)?;
    scope.append(container, cell)?;
    scope.insert(cell, position)?;
    Ok(cell)
}

/// Set a numeric attribute, or remove it when `value` does not exceed `default`
pub fn update_numeric_attribute(
    scope: &mut ChangeScope<'_>,
    node: NodeId,
    key: &str,
    value: usize,
    default: usize,
) {
    if value > default {
        scope.set_attribute(node, key, value);
    } else {
        scope.remove_attribute(node, key);
    }
}

/// Span attributes for a new cell, omitting values of 1
pub(crate) fn span_attributes(colspan: usize, rowspan: usize) -> Attributes {
    let mut attributes = Attributes::new();
    if colspan > 1 {
        attributes.insert(ATTR_COLSPAN.to_string(), colspan.into());
    }
    if rowspan > 1 {
        attributes.insert(ATTR_ROWSPAN.to_string(), rowspan.into());
    }
    attributes
}
