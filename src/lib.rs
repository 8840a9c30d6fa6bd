//! # bsgrid
//!
//! Geometry engine for responsive grids (rows, columns, colspan/rowspan)
//! kept as a tree inside a structured document.
//!
//! ## Features
//!
//! - **Span-aware traversal**: a lazy walker over the logical slots of a sparse grid
//! - **Structural edits**: insert/remove rows and columns with span bookkeeping
//! - **Shape utilities**: crop, split, overlap detection, empty row/column pruning
//! - **Atomic changes**: every edit runs in a change scope that rolls back on error
//! - **Column properties**: responsive breakpoint attributes (`col`, `colSM`, ... `colXXL`)
//! - **Notation and markup**: a compact text form and `container`/`row`/`col` markup
//!
//! ## Usage Examples
//!
//! ### Inserting a column through a spanning cell
//!
//! ```rust
//! use bsgrid::{load_grid, to_notation, GridConfig, GridUtils, InsertColumnsOptions};
//!
//! let (mut doc, grid) = load_grid("a{c3}\nd | e | f").unwrap();
//! let utils = GridUtils::new(GridConfig::blank());
//!
//! doc.change(|scope| utils.insert_columns(scope, grid, InsertColumnsOptions::new(1, 2)))
//!     .unwrap();
//!
//! assert_eq!(to_notation(&doc, grid), "a{c5}\nd | _ | _ | e | f");
//! ```
//!
//! ### Walking the slots of a grid
//!
//! ```rust
//! use bsgrid::{load_grid, GridWalker, WalkerOptions};
//!
//! let (doc, grid) = load_grid("a{r2} | b\nc").unwrap();
//! let options = WalkerOptions::new().row(1).include_all_slots(true);
//! let anchors: Vec<bool> = GridWalker::new(&doc, grid, options)
//!     .map(|slot| slot.is_anchor())
//!     .collect();
//! assert_eq!(anchors, vec![false, true]);
//! ```

/// Core grid modules
pub mod core;

/// Data layer - attribute names and breakpoint tables
pub mod data;

/// Feature modules - column properties, notation and markup
pub mod features;

/// Utility modules
pub mod utils;

// Re-export the engine
pub use crate::core::grid::{
    CellContent, EmptyContent, GridConfig, GridUtils, IndexRange, InsertColumnsOptions,
    InsertRowsOptions, PlaceholderContent, RemoveColumnsOptions, RemoveRowsOptions,
};
pub use crate::core::model::{
    AttributeValue, Attributes, ChangeScope, Document, InsertAt, NodeId, NodeKind, Position,
    Range, Selection,
};
pub use crate::core::structure::{
    adjust_last_column_index, adjust_last_row_index, crop_grid_to_dimensions,
    get_horizontally_overlapping_cells, get_vertically_overlapping_cells, remove_empty_columns,
    remove_empty_rows, remove_empty_rows_columns, split_horizontally, split_vertically,
    Dimensions,
};
pub use crate::core::walker::{GridSlot, GridWalker, WalkerOptions};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::markup::{self, to_markup};
pub use features::notation::{self, parse_notation, to_notation};
pub use features::properties::{
    self, Breakpoint, BreakpointProperties, ColumnPropertyCommand, CommandState,
};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{GridError, GridResult};

/// Parse notation into a new document holding the grid under its root
///
/// # Arguments
/// * `text` - Grid notation
///
/// # Returns
/// The document and the grid node
pub fn load_grid(text: &str) -> GridResult<(Document, NodeId)> {
    load_grid_with_config(text, &GridConfig::default())
}

/// Parse notation into a new document with a custom config
pub fn load_grid_with_config(text: &str, config: &GridConfig) -> GridResult<(Document, NodeId)> {
    let mut doc = Document::new();
    let root = doc.root();
    let grid = doc.change(|scope| {
        let grid = parse_notation(scope, config, text)?;
        scope.append(grid, root)?;
        Ok(grid)
    })?;
    Ok((doc, grid))
}

/// Replace `grid` in its parent by its crop to `dimensions`
///
/// # Returns
/// The cropped grid, now in the place of the original
pub fn crop_grid(
    scope: &mut ChangeScope<'_>,
    grid: NodeId,
    dimensions: Dimensions,
) -> GridResult<NodeId> {
    let position = scope
        .position_before(grid)
        .ok_or_else(|| GridError::not_found(format!("parent of grid {}", grid)))?;
    let cropped = crop_grid_to_dimensions(scope, grid, dimensions)?;
    scope.remove(grid)?;
    scope.insert(cropped, position)?;
    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_grid_attaches_to_root() {
        let (doc, grid) = load_grid("a | b").unwrap();
        assert_eq!(doc.parent(grid), Some(doc.root()));
        assert_eq!(doc.kind(grid), &NodeKind::Grid);
    }

    #[test]
    fn test_load_grid_uses_config_defaults() {
        let config = GridConfig::default().with_default_properties(
            BreakpointProperties::default()
                .with(Breakpoint::Md, "6")
                .unwrap(),
        );
        let (doc, grid) = load_grid_with_config("a{colMD=6} | b{colMD=4}", &config).unwrap();
        assert_eq!(to_notation(&doc, grid), "a | b{colMD=4}");
    }

    #[test]
    fn test_crop_grid_replaces_in_place() {
        let (mut doc, grid) = load_grid("a | b | c\nd | e | f").unwrap();
        let cropped = doc
            .change(|scope| crop_grid(scope, grid, Dimensions::new(0, 1, 1, 2)))
            .unwrap();

        assert_eq!(doc.children(doc.root()), &[cropped]);
        assert_eq!(doc.parent(grid), None);
        assert_eq!(to_notation(&doc, cropped), "b | c\ne | f");
    }

    #[test]
    fn test_failed_edit_leaves_grid_unchanged() {
        let (mut doc, grid) = load_grid("a | b\nc | d").unwrap();
        let utils = GridUtils::default();
        let err = doc
            .change(|scope| {
                utils.insert_rows(scope, grid, InsertRowsOptions::new(1, 1))?;
                utils.remove_rows(scope, grid, RemoveRowsOptions::new(2, 5))
            })
            .unwrap_err();

        assert!(err.is_out_of_range());
        assert_eq!(to_notation(&doc, grid), "a | b\nc | d");
    }

    #[test]
    fn test_grid_config_presets() {
        let config = GridConfig::default();
        assert_eq!(config.placeholder_text, "Content goes here.");
        assert_eq!(config.default_properties.get(Breakpoint::Xl), "0");
        assert!(GridConfig::blank().placeholder_text.is_empty());
    }
}
