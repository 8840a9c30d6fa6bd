//! Data layer - Static mappings and constants
//!
//! This module contains all static data used by the grid model:
//! - Model attribute names
//! - Markup class names
//! - Breakpoint tables and value validation

pub mod constants;

// Re-export commonly used items
pub use constants::{
    is_valid_column_value, ATTR_COLSPAN, ATTR_HEADING_COLUMNS, ATTR_HEADING_ROWS, ATTR_ROWSPAN,
    BREAKPOINT_ATTRIBUTES, BREAKPOINT_CLASS_PREFIXES, DEFAULT_PLACEHOLDER_TEXT,
};
