//! Constants and mapping tables for the grid model
//!
//! This module contains the attribute names, markup class names and
//! breakpoint tables shared by the model, the structural editing code and
//! the markup writer.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

// ============================================================================
// Model attribute names
// ============================================================================

/// Number of grid columns a cell occupies
pub const ATTR_COLSPAN: &str = "colspan";

/// Number of grid rows a cell occupies
pub const ATTR_ROWSPAN: &str = "rowspan";

/// Number of leading rows treated as the heading section
pub const ATTR_HEADING_ROWS: &str = "headingRows";

/// Number of leading columns treated as the heading section
pub const ATTR_HEADING_COLUMNS: &str = "headingColumns";

/// Largest colspan or rowspan accepted from grid notation
pub const MAX_SPAN: usize = 1000;

/// Breakpoint attribute names in ascending width order
pub const BREAKPOINT_ATTRIBUTES: [&str; 6] = ["col", "colSM", "colMD", "colLG", "colXL", "colXXL"];

/// Text written into freshly created cells
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Content goes here.";

/// Value of a breakpoint attribute that has not been configured
pub const DEFAULT_BREAKPOINT_VALUE: &str = "0";

// ============================================================================
// Markup class names
// ============================================================================

/// Class of the element wrapping the whole grid
pub const CLASS_CONTAINER: &str = "container";

/// Class of a row element
pub const CLASS_ROW: &str = "row";

/// Class of a cell element
pub const CLASS_COL: &str = "col";

/// Class of the editable content element inside a cell
pub const CLASS_CONTENT: &str = "content";

/// Breakpoint attribute name -> markup class prefix
pub static BREAKPOINT_CLASS_PREFIXES: phf::Map<&'static str, &'static str> = phf_map! {
    "col" => "col",
    "colSM" => "col-sm",
    "colMD" => "col-md",
    "colLG" => "col-lg",
    "colXL" => "col-xl",
    "colXXL" => "col-xxl",
};

lazy_static! {
    /// Allowed breakpoint values: the twelve grid columns plus `0` for "unset"
    pub static ref COLUMN_VALUES_PATTERN: Regex =
        Regex::new(r"^(0|1|2|3|4|5|6|7|8|9|10|11|12)$").expect("valid column value pattern");
}

/// Check whether `value` is an allowed breakpoint value
pub fn is_valid_column_value(value: &str) -> bool {
    COLUMN_VALUES_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_values() {
        for value in 0..=12 {
            assert!(is_valid_column_value(&value.to_string()));
        }
        assert!(!is_valid_column_value("13"));
        assert!(!is_valid_column_value("-1"));
        assert!(!is_valid_column_value("06"));
        assert!(!is_valid_column_value(""));
        assert!(!is_valid_column_value("auto"));
    }

    #[test]
    fn test_every_breakpoint_has_a_class_prefix() {
        for attribute in BREAKPOINT_ATTRIBUTES {
            assert!(BREAKPOINT_CLASS_PREFIXES.contains_key(attribute));
        }
        assert_eq!(BREAKPOINT_CLASS_PREFIXES.get("colMD"), Some(&"col-md"));
    }
}
