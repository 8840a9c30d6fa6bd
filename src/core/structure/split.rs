//! Splitting spanning cells

use crate::core::grid::{create_empty_cell, span_attributes, update_numeric_attribute, EmptyContent};
use crate::core::model::{ChangeScope, NodeId};
use crate::core::walker::{GridSlot, GridWalker, WalkerOptions};
use crate::data::constants::{ATTR_COLSPAN, ATTR_ROWSPAN};
use crate::utils::error::{GridError, GridResult};

/// Split `cell` at `split_row`, a row it spans below its anchor
///
/// The cell keeps the rows above `split_row`. A new blank cell is created at
/// `split_row` in the cell's column, taking over the remaining rows and the
/// cell's full width. Returns `None` when no slot exists at `split_row`.
pub fn split_horizontally(
    scope: &mut ChangeScope<'_>,
    cell: NodeId,
    split_row: usize,
) -> GridResult<Option<NodeId>> {
    let row = scope
        .parent(cell)
        .ok_or_else(|| GridError::not_found(format!("row of cell {}", cell)))?;
    let grid = scope
        .parent(row)
        .ok_or_else(|| GridError::not_found(format!("grid of row {}", row)))?;
    let anchor_row = scope
        .rows(grid)
        .iter()
        .position(|&r| r == row)
        .ok_or_else(|| GridError::not_found(format!("row {} in its grid", row)))?;

    let rowspan = scope.numeric_attribute(cell, ATTR_ROWSPAN, 1).max(1);
    let colspan = scope.numeric_attribute(cell, ATTR_COLSPAN, 1).max(1);

    if split_row <= anchor_row || split_row >= anchor_row + rowspan {
        return Err(GridError::invalid(format!(
            "cannot split cell spanning rows {}..={} at row {}",
            anchor_row,
            anchor_row + rowspan - 1,
            split_row
        )));
    }

    let kept_rowspan = split_row - anchor_row;
    let new_rowspan = rowspan - kept_rowspan;

    let options = WalkerOptions::new()
        .rows(anchor_row, split_row)
        .include_all_slots(true);
    let slots: Vec<GridSlot> = GridWalker::new(scope, grid, options).collect();

    let mut column = None;
    let mut position = None;
    for slot in &slots {
        if slot.cell == cell && column.is_none() {
            column = Some(slot.column);
        }
        if column == Some(slot.column) && slot.row == split_row {
            position = Some(slot.position_before());
        }
    }

    let new_cell = match position {
        Some(position) => Some(create_empty_cell(
            scope,
            position,
            span_attributes(colspan, new_rowspan),
            &EmptyContent,
        )?),
        None => None,
    };

    update_numeric_attribute(scope, cell, ATTR_ROWSPAN, kept_rowspan, 1);
    Ok(new_cell)
}

/// Split `cell`, anchored at `anchor_column`, at `split_column`
///
/// The new blank cell goes directly after `cell` in the same row and takes
/// over the remaining columns and the cell's full height.
pub fn split_vertically(
    scope: &mut ChangeScope<'_>,
    cell: NodeId,
    anchor_column: usize,
    split_column: usize,
) -> GridResult<NodeId> {
    let colspan = scope.numeric_attribute(cell, ATTR_COLSPAN, 1).max(1);
    let rowspan = scope.numeric_attribute(cell, ATTR_ROWSPAN, 1).max(1);

    if split_column <= anchor_column || split_column >= anchor_column + colspan {
        return Err(GridError::invalid(format!(
            "cannot split cell spanning columns {}..={} at column {}",
            anchor_column,
            anchor_column + colspan - 1,
            split_column
        )));
    }

    let kept_colspan = split_column - anchor_column;
    let position = scope
        .position_after(cell)
        .ok_or_else(|| GridError::not_found(format!("row of cell {}", cell)))?;

    let new_cell = create_empty_cell(
        scope,
        position,
        span_attributes(colspan - kept_colspan, rowspan),
        &EmptyContent,
    )?;

    update_numeric_attribute(scope, cell, ATTR_COLSPAN, kept_colspan, 1);
    Ok(new_cell)
}
