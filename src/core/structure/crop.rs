//! Cropping a grid to a rectangle

use crate::core::grid::{column_count, create_empty_cell, row_count, update_numeric_attribute, EmptyContent};
use crate::core::model::{Attributes, ChangeScope, InsertAt, NodeId, NodeKind};
use crate::core::walker::{GridSlot, GridWalker, WalkerOptions};
use crate::data::constants::{ATTR_COLSPAN, ATTR_HEADING_COLUMNS, ATTR_HEADING_ROWS, ATTR_ROWSPAN};
use crate::utils::error::{GridError, GridResult};

/// Inclusive rectangle of grid slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub first_row: usize,
    pub first_column: usize,
    pub last_row: usize,
    pub last_column: usize,
}

impl Dimensions {
    pub fn new(first_row: usize, first_column: usize, last_row: usize, last_column: usize) -> Self {
        Dimensions {
            first_row,
            first_column,
            last_row,
            last_column,
        }
    }

    pub fn height(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    pub fn width(&self) -> usize {
        self.last_column - self.first_column + 1
    }
}

/// Copy the `dimensions` rectangle of `source` into a new detached grid
///
/// ```text
///        0   1   2   3   4                      0   1   2
///      ┌───┬───┬───┬───┬───┐
///   0  │ a │ b │ c │ d │ e │
///      ├───┴───┤   ├───┴───┤                  ┌───┬───┬───┐
///   1  │ f     │   │ g     │                  │   │   │ g │  0
///      ├───┬───┴───┼───┬───┤   rows 1..=3     ├───┴───┼───┤
///   2  │ h │ i     │ j │ k │   columns 1..=3  │ i     │ j │  1
///      ├───┤       ├───┤   │   give:          │       ├───┤
///   3  │ l │       │ m │   │                  │       │ m │  2
///      ├───┼───┬───┤   ├───┤                  └───────┴───┘
///   4  │ n │ o │ p │   │ q │
///      └───┴───┴───┴───┴───┘
/// ```
///
/// Cells anchored inside the rectangle are cloned with their content and
/// trimmed to fit. Slots covered by a cell anchored outside get a blank cell.
pub fn crop_grid_to_dimensions(
    scope: &mut ChangeScope<'_>,
    source: NodeId,
    dimensions: Dimensions,
) -> GridResult<NodeId> {
    let Dimensions {
        first_row,
        first_column,
        last_row,
        last_column,
    } = dimensions;

    if first_row > last_row || first_column > last_column {
        return Err(GridError::invalid(format!(
            "empty crop rectangle ({}, {})..=({}, {})",
            first_row, first_column, last_row, last_column
        )));
    }
    let rows = row_count(scope, source);
    let columns = column_count(scope, source);
    if last_row >= rows || last_column >= columns {
        return Err(GridError::out_of_range(
            "crop_grid_to_dimensions",
            format!(
                "({}, {}) is outside a {}x{} grid",
                last_row, last_column, rows, columns
            ),
        ));
    }

    let cropped = scope.create_element(NodeKind::Grid, Attributes::new());
    let mut target_rows = Vec::with_capacity(dimensions.height());
    for _ in 0..dimensions.height() {
        let row = scope.create_element(NodeKind::Row, Attributes::new());
        scope.append(row, cropped)?;
        target_rows.push(row);
    }

    let options = WalkerOptions::new()
        .rows(first_row, last_row)
        .columns(first_column, last_column)
        .include_all_slots(true);
    let slots: Vec<GridSlot> = GridWalker::new(scope, source, options).collect();

    for slot in slots {
        let row = target_rows[slot.row - first_row];

        if !slot.is_anchor() {
            // Cut into a cell anchored outside the rectangle
            if slot.cell_anchor_row < first_row || slot.cell_anchor_column < first_column {
                let position = scope.position_at(row, InsertAt::End);
                create_empty_cell(scope, position, Attributes::new(), &EmptyContent)?;
            }
        } else {
            let copy = scope.clone_element(slot.cell);
            scope.append(copy, row)?;
            trim_cell_if_needed(scope, copy, slot.row, slot.column, last_row, last_column);
        }
    }

    add_headings_to_cropped_grid(scope, cropped, source, first_row, first_column);
    Ok(cropped)
}

/// Shrink a cell's spans so it ends at `limit_row`/`limit_column` at the latest
pub fn trim_cell_if_needed(
    scope: &mut ChangeScope<'_>,
    cell: NodeId,
    cell_row: usize,
    cell_column: usize,
    limit_row: usize,
    limit_column: usize,
) {
    let colspan = scope.numeric_attribute(cell, ATTR_COLSPAN, 1).max(1);
    let rowspan = scope.numeric_attribute(cell, ATTR_ROWSPAN, 1).max(1);

    if cell_column + colspan - 1 > limit_column {
        update_numeric_attribute(scope, cell, ATTR_COLSPAN, limit_column - cell_column + 1, 1);
    }
    if cell_row + rowspan - 1 > limit_row {
        update_numeric_attribute(scope, cell, ATTR_ROWSPAN, limit_row - cell_row + 1, 1);
    }
}

fn add_headings_to_cropped_grid(
    scope: &mut ChangeScope<'_>,
    cropped: NodeId,
    source: NodeId,
    first_row: usize,
    first_column: usize,
) {
    let heading_rows = scope.numeric_attribute(source, ATTR_HEADING_ROWS, 0);
    if heading_rows > 0 {
        update_numeric_attribute(
            scope,
            cropped,
            ATTR_HEADING_ROWS,
            heading_rows.saturating_sub(first_row),
            0,
        );
    }

    let heading_columns = scope.numeric_attribute(source, ATTR_HEADING_COLUMNS, 0);
    if heading_columns > 0 {
        update_numeric_attribute(
            scope,
            cropped,
            ATTR_HEADING_COLUMNS,
            heading_columns.saturating_sub(first_column),
            0,
        );
    }
}
