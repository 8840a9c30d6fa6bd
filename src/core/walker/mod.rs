//! Grid traversal
//!
//! A lazy iterator over the logical slots of a grid whose cells may span
//! several rows and columns.
//!
//! # Architecture
//!
//! The walker keeps a virtual cursor over the sparse tree and a map of the
//! slots covered by cells anchored earlier:
//!
//! ```text
//! row children -> real cells + span map -> (row, column) slots
//! ```
//!
//! Only anchor slots are yielded by default. With `include_all_slots` the
//! walker also yields every slot spanned by a cell anchored above or to the
//! left, which is what structural edits use to find insertion points.
//!
//! # Example
//!
//! ```
//! use bsgrid::core::model::Document;
//! use bsgrid::core::walker::{GridWalker, WalkerOptions};
//! use bsgrid::features::notation::parse_notation;
//! use bsgrid::GridConfig;
//!
//! let mut doc = Document::new();
//! let grid = doc
//!     .change(|scope| parse_notation(scope, &GridConfig::default(), "a{c2} | b\nc | d | e"))
//!     .unwrap();
//!
//! let anchors: Vec<(usize, usize)> = GridWalker::new(&doc, grid, WalkerOptions::new())
//!     .map(|slot| (slot.row, slot.column))
//!     .collect();
//! assert_eq!(anchors, vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]);
//! ```

mod options;
mod slot;


pub use options::WalkerOptions;
pub use slot::GridSlot;

use fxhash::{FxHashMap, FxHashSet};

use crate::core::model::{Document, NodeId};
use crate::data::constants::{ATTR_COLSPAN, ATTR_ROWSPAN};

/// Cell spanning over a slot it is not anchored at
#[derive(Debug, Clone, Copy)]
struct SpanRecord {
    cell: NodeId,
    row: usize,
    column: usize,
    width: usize,
    height: usize,
}

/// Iterator over the slots of a grid
///
/// The walker borrows the document for its whole lifetime; callers that
/// mutate the grid collect the slots they need first.
pub struct GridWalker<'a> {
    doc: &'a Document,
    grid: NodeId,
    start_row: usize,
    end_row: Option<usize>,
    start_column: usize,
    end_column: Option<usize>,
    include_all_slots: bool,
    skip_rows: FxHashSet<usize>,

    /// Logical row counter (metadata children excluded)
    row: usize,
    /// Child index of the current row inside the grid
    row_index: usize,
    column: usize,
    cell_index: usize,
    spanned: FxHashMap<(usize, usize), SpanRecord>,
    next_column_at_column: Option<usize>,
}

impl<'a> GridWalker<'a> {
    /// Create a walker over `grid`
    pub fn new(doc: &'a Document, grid: NodeId, options: WalkerOptions) -> Self {
        let (start_row, end_row) = options.row_bounds();
        let (start_column, end_column) = options.column_bounds();

        GridWalker {
            doc,
            grid,
            start_row,
            end_row,
            start_column,
            end_column,
            include_all_slots: options.include_all_slots,
            skip_rows: FxHashSet::default(),
            row: 0,
            row_index: 0,
            column: 0,
            cell_index: 0,
            spanned: FxHashMap::default(),
            next_column_at_column: None,
        }
    }

    /// Walk the whole grid, anchors only
    pub fn anchors(doc: &'a Document, grid: NodeId) -> Self {
        Self::new(doc, grid, WalkerOptions::new())
    }

    /// Suppress every slot of `row` from now on
    ///
    /// Rows already walked are unaffected.
    pub fn skip_row(&mut self, row: usize) {
        self.skip_rows.insert(row);
    }

    fn is_over_end_row(&self) -> bool {
        self.end_row.is_some_and(|end| self.row > end)
    }

    fn is_over_end_column(&self) -> bool {
        self.end_column.is_some_and(|end| self.column > end)
    }

    fn should_skip_slot(&self) -> bool {
        self.skip_rows.contains(&self.row)
            || self.row < self.start_row
            || self.column < self.start_column
            || self.is_over_end_column()
    }

    fn advance_to_next_row(&mut self) {
        self.row += 1;
        self.row_index += 1;
        self.column = 0;
        self.cell_index = 0;
        self.next_column_at_column = None;
    }

    fn record_spans(&mut self, record: SpanRecord) {
        for row in record.row..record.row + record.height {
            for column in record.column..record.column + record.width {
                if row != record.row || column != record.column {
                    self.spanned.insert((row, column), record);
                }
            }
        }
    }

    fn slot(&self, record: SpanRecord, row_node: NodeId) -> GridSlot {
        GridSlot {
            cell: record.cell,
            row: self.row,
            column: self.column,
            cell_anchor_row: record.row,
            cell_anchor_column: record.column,
            cell_width: record.width,
            cell_height: record.height,
            cell_index: self.cell_index,
            row_index: self.row_index,
            row_node,
        }
    }
}

impl<'a> Iterator for GridWalker<'a> {
    type Item = GridSlot;

    fn next(&mut self) -> Option<GridSlot> {
        loop {
            let row_node = self.doc.child(self.grid, self.row_index)?;
            if self.is_over_end_row() {
                return None;
            }

            // Metadata children do not count as rows
            if !self.doc.kind(row_node).is_row() {
                self.row_index += 1;
                continue;
            }

            if self.is_over_end_column() {
                self.advance_to_next_row();
                continue;
            }

            let mut out = None;

            if let Some(&record) = self.spanned.get(&(self.row, self.column)) {
                if self.include_all_slots && !self.should_skip_slot() {
                    out = Some(self.slot(record, row_node));
                }
            } else {
                let Some(cell) = self.doc.child(row_node, self.cell_index) else {
                    self.advance_to_next_row();
                    continue;
                };

                let record = SpanRecord {
                    cell,
                    row: self.row,
                    column: self.column,
                    width: self.doc.numeric_attribute(cell, ATTR_COLSPAN, 1).max(1),
                    height: self.doc.numeric_attribute(cell, ATTR_ROWSPAN, 1).max(1),
                };

                if record.width > 1 || record.height > 1 {
                    self.record_spans(record);
                }

                if !self.should_skip_slot() {
                    out = Some(self.slot(record, row_node));
                }

                self.next_column_at_column = Some(self.column + record.width);
            }

            self.column += 1;
            if Some(self.column) == self.next_column_at_column {
                self.cell_index += 1;
            }

            if out.is_some() {
                return out;
            }
        }
    }
}
