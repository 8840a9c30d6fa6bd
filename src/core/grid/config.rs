//! Facade configuration and operation options

use crate::data::constants::DEFAULT_PLACEHOLDER_TEXT;
use crate::features::properties::BreakpointProperties;

/// Configuration of the grid facade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Text written into cells created by structural edits
    /// Default: "Content goes here."
    pub placeholder_text: String,

    /// Default breakpoint values; a cell value equal to its default reads as unset
    /// Default: all "0"
    pub default_properties: BreakpointProperties,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            default_properties: BreakpointProperties::default(),
        }
    }
}

impl GridConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// New cells hold a single empty paragraph
    pub fn blank() -> Self {
        Self {
            placeholder_text: String::new(),
            ..Self::default()
        }
    }

    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    pub fn with_default_properties(mut self, properties: BreakpointProperties) -> Self {
        self.default_properties = properties;
        self
    }
}

/// Options of [`GridUtils::insert_rows`](super::GridUtils::insert_rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertRowsOptions {
    /// Row index before which new rows go
    pub at: usize,
    /// Number of rows to insert
    pub rows: usize,
    /// Copy the cell layout of the row above (`Some(true)`) or of row `at`
    /// (`Some(false)`); `None` inserts flat rows
    pub copy_structure_from_above: Option<bool>,
}

impl Default for InsertRowsOptions {
    fn default() -> Self {
        Self {
            at: 0,
            rows: 1,
            copy_structure_from_above: None,
        }
    }
}

impl InsertRowsOptions {
    pub fn new(at: usize, rows: usize) -> Self {
        Self {
            at,
            rows,
            copy_structure_from_above: None,
        }
    }

    pub fn copy_structure_from_above(mut self, from_above: bool) -> Self {
        self.copy_structure_from_above = Some(from_above);
        self
    }
}

/// Options of [`GridUtils::insert_columns`](super::GridUtils::insert_columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertColumnsOptions {
    pub at: usize,
    pub columns: usize,
}

impl Default for InsertColumnsOptions {
    fn default() -> Self {
        Self { at: 0, columns: 1 }
    }
}

impl InsertColumnsOptions {
    pub fn new(at: usize, columns: usize) -> Self {
        Self { at, columns }
    }
}

/// Options of [`GridUtils::remove_rows`](super::GridUtils::remove_rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveRowsOptions {
    pub at: usize,
    pub rows: usize,
}

impl RemoveRowsOptions {
    pub fn new(at: usize, rows: usize) -> Self {
        Self { at, rows }
    }
}

/// Options of [`GridUtils::remove_columns`](super::GridUtils::remove_columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveColumnsOptions {
    pub at: usize,
    pub columns: usize,
}

impl RemoveColumnsOptions {
    pub fn new(at: usize, columns: usize) -> Self {
        Self { at, columns }
    }
}

/// Inclusive index range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub first: usize,
    pub last: usize,
}

impl IndexRange {
    /// Smallest range holding every index; `None` for no indexes
    pub fn from_indexes(indexes: impl IntoIterator<Item = usize>) -> Option<Self> {
        indexes.into_iter().fold(None, |range, index| {
            Some(match range {
                None => IndexRange {
                    first: index,
                    last: index,
                },
                Some(IndexRange { first, last }) => IndexRange {
                    first: first.min(index),
                    last: last.max(index),
                },
            })
        })
    }

    /// Whether the whole range lies on one side of a heading section of `size`
    pub fn is_in_same_section(&self, size: usize) -> bool {
        (self.first < size) == (self.last < size)
    }
}
