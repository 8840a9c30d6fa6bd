//! Grid facade
//!
//! [`GridUtils`] is the entry point used by editing commands. It composes the
//! walker and the structural edits, and owns the collaborator that fills new
//! cells with content.
//!
//! All mutating operations take the caller's [`ChangeScope`], so several
//! edits can be batched into one atomic change:
//!
//! ```
//! use bsgrid::core::model::Document;
//! use bsgrid::{GridUtils, InsertColumnsOptions, InsertRowsOptions};
//!
//! let mut doc = Document::new();
//! let utils = GridUtils::default();
//! let root = doc.root();
//! let grid = doc
//!     .change(|scope| {
//!         let grid = utils.create_grid(scope, 2, 3)?;
//!         scope.append(grid, root)?;
//!         utils.insert_rows(scope, grid, InsertRowsOptions::new(1, 2))?;
//!         utils.insert_columns(scope, grid, InsertColumnsOptions::new(3, 1))?;
//!         Ok(grid)
//!     })
//!     .unwrap();
//!
//! assert_eq!(utils.get_row_count(&doc, grid), 4);
//! assert_eq!(utils.get_column_count(&doc, grid), 4);
//! ```

mod columns;
mod config;
mod content;
mod rows;
mod selection;


pub use config::{
    GridConfig, IndexRange, InsertColumnsOptions, InsertRowsOptions, RemoveColumnsOptions,
    RemoveRowsOptions,
};
pub use content::{
    create_empty_cell, update_numeric_attribute, CellContent, EmptyContent, PlaceholderContent,
};

pub(crate) use columns::remove_columns_unpruned;
pub(crate) use content::span_attributes;
pub(crate) use rows::remove_rows_unpruned;

use crate::core::model::{Attributes, ChangeScope, Document, NodeId, NodeKind, Position};
use crate::core::walker::{GridWalker, WalkerOptions};
use crate::data::constants::ATTR_COLSPAN;
use crate::utils::error::GridResult;

/// Grid operations exposed to editing commands
pub struct GridUtils {
    config: GridConfig,
    content: Box<dyn CellContent>,
}

impl Default for GridUtils {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl std::fmt::Debug for GridUtils {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridUtils")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GridUtils {
    /// New cells get a paragraph with the configured placeholder text
    pub fn new(config: GridConfig) -> Self {
        let content: Box<dyn CellContent> = if config.placeholder_text.is_empty() {
            Box::new(EmptyContent)
        } else {
            Box::new(PlaceholderContent::new(config.placeholder_text.clone()))
        };
        GridUtils { config, content }
    }

    /// Use a custom content collaborator for new cells
    pub fn with_content(config: GridConfig, content: Box<dyn CellContent>) -> Self {
        GridUtils { config, content }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn content(&self) -> &dyn CellContent {
        self.content.as_ref()
    }

    /// Create a detached `rows x columns` grid of flat cells
    ///
    /// A zero count is treated as 1.
    pub fn create_grid(
        &self,
        scope: &mut ChangeScope<'_>,
        rows: usize,
        columns: usize,
    ) -> GridResult<NodeId> {
        let grid = scope.create_element(NodeKind::Grid, Attributes::new());
        create_empty_rows(scope, grid, 0, rows.max(1), columns.max(1), self.content())?;
        Ok(grid)
    }

    pub fn get_row_count(&self, doc: &Document, grid: NodeId) -> usize {
        row_count(doc, grid)
    }

    pub fn get_column_count(&self, doc: &Document, grid: NodeId) -> usize {
        column_count(doc, grid)
    }

    pub fn create_walker<'a>(
        &self,
        doc: &'a Document,
        grid: NodeId,
        options: WalkerOptions,
    ) -> GridWalker<'a> {
        GridWalker::new(doc, grid, options)
    }
}

/// Number of row children of `grid`
pub fn row_count(doc: &Document, grid: NodeId) -> usize {
    doc.children(grid)
        .iter()
        .filter(|&&c| doc.kind(c).is_row())
        .count()
}

/// Width of `grid`, taken from the colspans of its first row
pub fn column_count(doc: &Document, grid: NodeId) -> usize {
    let Some(first_row) = doc
        .children(grid)
        .iter()
        .copied()
        .find(|&c| doc.kind(c).is_row())
    else {
        return 0;
    };

    doc.children(first_row)
        .iter()
        .map(|&cell| doc.numeric_attribute(cell, ATTR_COLSPAN, 1).max(1))
        .sum()
}

/// Child index at which a row inserted as logical row `at` goes
fn row_insert_index(doc: &Document, grid: NodeId, at: usize) -> usize {
    let rows = doc.rows(grid);
    match rows.get(at) {
        Some(&row) => doc.index_of(row).unwrap_or(0),
        None => rows
            .last()
            .and_then(|&row| doc.index_of(row))
            .map_or(doc.child_count(grid), |index| index + 1),
    }
}

fn create_empty_rows(
    scope: &mut ChangeScope<'_>,
    grid: NodeId,
    index: usize,
    rows: usize,
    columns: usize,
    content: &dyn CellContent,
) -> GridResult<()> {
    for _ in 0..rows {
        let row = scope.create_element(NodeKind::Row, Attributes::new());
        scope.insert(row, Position::new(grid, index))?;
        create_cells(scope, columns, Position::new(row, 0), content)?;
    }
    Ok(())
}

/// Insert `count` flat cells, all at `position`
fn create_cells(
    scope: &mut ChangeScope<'_>,
    count: usize,
    position: Position,
    content: &dyn CellContent,
) -> GridResult<()> {
    for _ in 0..count {
        create_empty_cell(scope, position, Attributes::new(), content)?;
    }
    Ok(())
}
