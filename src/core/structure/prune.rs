//! Removal of rows and columns without anchored cells
//!
//! Structural edits can leave a grid in which some column has no cell
//! anchored in it, or some row has no cell at all:
//!
//! ```text
//!     +----+----+----+----+
//!     | 00      | 02      |
//!     +----+----+         +
//!     | 10      |         |
//!     +----+----+----+----+
//!     | 20      | 22 | 23 |
//!     +         +    +    +
//!     |         |    |    | <-- empty row
//!     +----+----+----+----+
//!             ^--- empty column
//! ```
//!
//! Removing one empty column or row can reveal another, so pruning repeats
//! until neither exists.

use crate::core::grid::{column_count, remove_columns_unpruned, remove_rows_unpruned};
use crate::core::model::{ChangeScope, Document, NodeId};
use crate::core::walker::GridWalker;
use crate::utils::error::GridResult;

/// Columns of `grid` with no anchored cell
pub fn find_empty_columns(doc: &Document, grid: NodeId) -> Vec<usize> {
    let width = column_count(doc, grid);
    let mut anchors = vec![0usize; width];

    for slot in GridWalker::anchors(doc, grid) {
        if let Some(count) = anchors.get_mut(slot.column) {
            *count += 1;
        }
    }

    anchors
        .iter()
        .enumerate()
        .filter(|(_, &count)| count == 0)
        .map(|(column, _)| column)
        .collect()
}

/// Rows of `grid` with no cell children
pub fn find_empty_rows(doc: &Document, grid: NodeId) -> Vec<usize> {
    doc.rows(grid)
        .iter()
        .enumerate()
        .filter(|(_, &row)| doc.child_count(row) == 0)
        .map(|(index, _)| index)
        .collect()
}

/// Remove the last empty column, if any
///
/// Returns `true` when a column was removed.
pub fn remove_empty_columns(scope: &mut ChangeScope<'_>, grid: NodeId) -> GridResult<bool> {
    let Some(&column) = find_empty_columns(scope, grid).last() else {
        return Ok(false);
    };

    log::debug!("Removing empty column: {}", column);
    remove_columns_unpruned(scope, grid, column, column)?;
    Ok(true)
}

/// Remove the last empty row, if any
///
/// Returns `true` when a row was removed.
pub fn remove_empty_rows(scope: &mut ChangeScope<'_>, grid: NodeId) -> GridResult<bool> {
    let Some(&row) = find_empty_rows(scope, grid).last() else {
        return Ok(false);
    };

    log::debug!("Removing empty row: {}", row);
    remove_rows_unpruned(scope, grid, row, row)?;
    Ok(true)
}

/// Remove empty columns and rows until none is left
pub fn remove_empty_rows_columns(scope: &mut ChangeScope<'_>, grid: NodeId) -> GridResult<()> {
    loop {
        if remove_empty_columns(scope, grid)? {
            continue;
        }
        if !remove_empty_rows(scope, grid)? {
            return Ok(());
        }
    }
}
