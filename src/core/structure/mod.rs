//! Shape utilities
//!
//! Lower-level helpers built on the walker:
//! - `crop`: copy a rectangle of a grid into a new grid
//! - `split`: split a spanning cell along a row or column
//! - `overlap`: find cells reaching across a row or column boundary
//! - `adjust`: extend a selection rectangle past spanning cells
//! - `prune`: remove rows and columns left without anchored cells

mod adjust;
mod crop;
mod overlap;
mod prune;
mod split;

#[cfg(test)]
mod tests;

pub use adjust::{adjust_last_column_index, adjust_last_row_index};
pub use crop::{crop_grid_to_dimensions, trim_cell_if_needed, Dimensions};
pub use overlap::{get_horizontally_overlapping_cells, get_vertically_overlapping_cells};
pub use prune::{
    find_empty_columns, find_empty_rows, remove_empty_columns, remove_empty_rows,
    remove_empty_rows_columns,
};
pub use split::{split_horizontally, split_vertically};
