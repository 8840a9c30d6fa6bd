//! Core grid modules
//!
//! This module contains the grid geometry engine:
//! - `model`: in-memory host document and change scopes
//! - `walker`: span-aware traversal of grid slots
//! - `grid`: the facade with row/column insertion and removal
//! - `structure`: crop, split, overlap and pruning utilities

pub mod grid;
pub mod model;
pub mod structure;
pub mod walker;

// Re-export main types from the facade
pub use grid::{
    CellContent, EmptyContent, GridConfig, GridUtils, IndexRange, InsertColumnsOptions,
    InsertRowsOptions, PlaceholderContent, RemoveColumnsOptions, RemoveRowsOptions,
};

// Re-export the document model
pub use model::{ChangeScope, Document, NodeId, NodeKind, Position, Range, Selection};

// Re-export traversal types
pub use walker::{GridSlot, GridWalker, WalkerOptions};
