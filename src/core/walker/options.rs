//! Walker configuration

/// Sub-region and slot selection for a [`GridWalker`](super::GridWalker)
///
/// A single `row` takes precedence over a `start_row`/`end_row` range when
/// both are set; `column` likewise wins over the column range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkerOptions {
    /// Walk only this row
    pub row: Option<usize>,

    /// First row to yield slots for
    /// Default: 0
    pub start_row: Option<usize>,

    /// Last row to walk (inclusive)
    /// Default: unbounded
    pub end_row: Option<usize>,

    /// Walk only this column
    pub column: Option<usize>,

    /// First column to yield slots for
    /// Default: 0
    pub start_column: Option<usize>,

    /// Last column to walk (inclusive)
    /// Default: unbounded
    pub end_column: Option<usize>,

    /// Also yield slots spanned by cells anchored elsewhere
    /// Default: false
    pub include_all_slots: bool,
}

impl WalkerOptions {
    /// Create new options walking the whole grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the walk to a single row
    pub fn row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Restrict the walk to rows `start..=end`
    pub fn rows(mut self, start: usize, end: usize) -> Self {
        self.start_row = Some(start);
        self.end_row = Some(end);
        self
    }

    pub fn start_row(mut self, start: usize) -> Self {
        self.start_row = Some(start);
        self
    }

    pub fn end_row(mut self, end: usize) -> Self {
        self.end_row = Some(end);
        self
    }

    /// Restrict the walk to a single column
    pub fn column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Restrict the walk to columns `start..=end`
    pub fn columns(mut self, start: usize, end: usize) -> Self {
        self.start_column = Some(start);
        self.end_column = Some(end);
        self
    }

    pub fn include_all_slots(mut self, include: bool) -> Self {
        self.include_all_slots = include;
        self
    }

    /// Effective `(start, end)` row bounds
    pub(crate) fn row_bounds(&self) -> (usize, Option<usize>) {
        match self.row {
            Some(row) => (row, Some(row)),
            None => (self.start_row.unwrap_or(0), self.end_row),
        }
    }

    /// Effective `(start, end)` column bounds
    pub(crate) fn column_bounds(&self) -> (usize, Option<usize>) {
        match self.column {
            Some(column) => (column, Some(column)),
            None => (self.start_column.unwrap_or(0), self.end_column),
        }
    }
}
