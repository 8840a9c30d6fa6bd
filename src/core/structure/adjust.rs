//! Normalizing rectangular selections

use super::crop::Dimensions;
use crate::core::model::{Document, NodeId};
use crate::core::walker::{GridSlot, GridWalker, WalkerOptions};

/// Last row of a rectangular selection, extended past cells that reach below it
///
/// ```text
///        +---+---+---+---+
///      0 | a | b | c | d |
///        +   +   +---+---+
///      1 |   | e | f | g |
///        +   +---+   +---+
///      2 |   | h |   | i | <- last row, each cell has rowspan = 2,
///        +   +   +   +   +    so the result is 3, not 2
///      3 |   |   |   |   |
///        +---+---+---+---+
/// ```
pub fn adjust_last_row_index(doc: &Document, grid: NodeId, dimensions: Dimensions) -> usize {
    let options = WalkerOptions::new()
        .columns(dimensions.first_column, dimensions.last_column)
        .row(dimensions.last_row);
    let slots: Vec<GridSlot> = GridWalker::new(doc, grid, options).collect();

    match slots.first() {
        Some(first) if slots.iter().any(|slot| slot.cell_height != 1) => {
            dimensions.last_row + first.cell_height - 1
        }
        _ => dimensions.last_row,
    }
}

/// Last column of a rectangular selection, extended past cells that reach
/// right of it
pub fn adjust_last_column_index(doc: &Document, grid: NodeId, dimensions: Dimensions) -> usize {
    let options = WalkerOptions::new()
        .rows(dimensions.first_row, dimensions.last_row)
        .column(dimensions.last_column);
    let slots: Vec<GridSlot> = GridWalker::new(doc, grid, options).collect();

    match slots.first() {
        Some(first) if slots.iter().any(|slot| slot.cell_width != 1) => {
            dimensions.last_column + first.cell_width - 1
        }
        _ => dimensions.last_column,
    }
}
