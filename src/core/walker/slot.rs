//! Slot descriptors yielded by the walker

use crate::core::model::{NodeId, Position};

/// One logical `(row, column)` coordinate of a grid and the cell covering it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    /// The cell occupying this slot
    pub cell: NodeId,
    /// Row of this slot
    pub row: usize,
    /// Column of this slot
    pub column: usize,
    /// Row of the cell's top-left corner
    pub cell_anchor_row: usize,
    /// Column of the cell's top-left corner
    pub cell_anchor_column: usize,
    /// Colspan of the cell
    pub cell_width: usize,
    /// Rowspan of the cell
    pub cell_height: usize,
    /// Index of the next real cell within the row when this slot was reached
    pub cell_index: usize,
    /// Child index of the row inside the grid (counts metadata children)
    pub row_index: usize,
    /// The row node this slot belongs to
    pub row_node: NodeId,
}

impl GridSlot {
    /// Whether this slot is the top-left corner of its cell
    pub fn is_anchor(&self) -> bool {
        self.row == self.cell_anchor_row && self.column == self.cell_anchor_column
    }

    /// Last row covered by the cell
    pub fn cell_last_row(&self) -> usize {
        self.cell_anchor_row + self.cell_height - 1
    }

    /// Last column covered by the cell
    pub fn cell_last_column(&self) -> usize {
        self.cell_anchor_column + self.cell_width - 1
    }

    /// Document position at which content for this slot would be inserted
    pub fn position_before(&self) -> Position {
        Position::new(self.row_node, self.cell_index)
    }
}
