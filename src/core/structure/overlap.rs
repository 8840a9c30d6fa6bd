//! Cells reaching across a row or column boundary

use crate::core::model::{Document, NodeId};
use crate::core::walker::{GridSlot, GridWalker, WalkerOptions};

/// Anchor slots of cells that start above `overlap_row` and reach into it
///
/// ```text
///     ┌───┬───┬───┬───┬───┐
///  0  │ a │ b │ c │ d │ e │
///     │   ├───┼───┼───┼───┤
///  1  │   │ f │ g │ h │ i │
///     ├───┤   ├───┼───┤   │
///  2  │ j │   │ k │ l │   │
///     │   │   │   ├───┼───┤
///  3  │   │   │   │ m │ n │  <- overlap_row = 3 gives f, j, k
///     ├───┼───┤   │   ├───│
///  4  │ o │ p │   │   │ q │
///     └───┴───┴───┴───┴───┘
/// ```
///
/// Rows before `start_row` are not inspected.
pub fn get_vertically_overlapping_cells(
    doc: &Document,
    grid: NodeId,
    overlap_row: usize,
    start_row: usize,
) -> Vec<GridSlot> {
    let Some(end_row) = overlap_row.checked_sub(1) else {
        return Vec::new();
    };

    GridWalker::new(doc, grid, WalkerOptions::new().rows(start_row, end_row))
        .filter(|slot| slot.row < overlap_row && overlap_row <= slot.cell_last_row())
        .collect()
}

/// Anchor slots of cells that start left of `overlap_column` and reach into it
pub fn get_horizontally_overlapping_cells(
    doc: &Document,
    grid: NodeId,
    overlap_column: usize,
) -> Vec<GridSlot> {
    GridWalker::anchors(doc, grid)
        .filter(|slot| slot.column < overlap_column && overlap_column <= slot.cell_last_column())
        .collect()
}
