//! Feature modules - Column properties and conversion helpers
//!
//! This module contains the features built on top of the grid engine:
//! - Responsive breakpoint properties and the column property command
//! - Plain-text grid notation (parse and write)
//! - Markup output with container/row/col classes

pub mod markup;
pub mod notation;
pub mod properties;

// Re-export commonly used types
pub use markup::to_markup;
pub use notation::{parse_notation, to_notation};
pub use properties::{Breakpoint, BreakpointProperties, ColumnPropertyCommand, CommandState};
