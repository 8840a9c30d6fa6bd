//! Selection queries over grid cells

use super::{GridUtils, IndexRange};
use crate::core::model::{Document, NodeId, NodeKind, Range, Selection};
use crate::core::walker::GridWalker;
use crate::data::constants::{ATTR_HEADING_COLUMNS, ATTR_HEADING_ROWS};

impl GridUtils {
    /// Cells affected by `selection`: the fully selected cells, or the cells
    /// holding the selection when none is fully selected
    pub fn get_selection_affected_cells(&self, doc: &Document, selection: &Selection) -> Vec<NodeId> {
        let selected = self.get_selected_cells(doc, selection);
        if !selected.is_empty() {
            return selected;
        }
        self.get_cells_containing_selection(doc, selection)
    }

    /// Cells wrapped exactly by a selection range, in document order
    pub fn get_selected_cells(&self, doc: &Document, selection: &Selection) -> Vec<NodeId> {
        sort_ranges(doc, selection.ranges())
            .into_iter()
            .filter_map(|range| range.contained_element(doc))
            .filter(|&node| doc.kind(node).is_cell())
            .collect()
    }

    /// Cells holding the start of each selection range
    pub fn get_cells_containing_selection(
        &self,
        doc: &Document,
        selection: &Selection,
    ) -> Vec<NodeId> {
        selection
            .ranges()
            .iter()
            .filter_map(|range| doc.find_ancestor(range.start.parent, NodeKind::is_cell))
            .collect()
    }

    /// First and last logical row index of `cells`
    pub fn get_row_index_range(&self, doc: &Document, cells: &[NodeId]) -> Option<IndexRange> {
        IndexRange::from_indexes(cells.iter().filter_map(|&cell| row_index_of(doc, cell)))
    }

    /// First and last anchor column of `cells`
    pub fn get_column_index_range(&self, doc: &Document, cells: &[NodeId]) -> Option<IndexRange> {
        let grid = cells
            .first()
            .and_then(|&cell| doc.find_ancestor(cell, NodeKind::is_grid))?;

        IndexRange::from_indexes(
            GridWalker::anchors(doc, grid)
                .filter(|slot| cells.contains(&slot.cell))
                .map(|slot| slot.column),
        )
    }

    /// Whether `cells` stay on one side of the heading rows and of the heading columns
    pub fn are_cells_in_same_section(&self, doc: &Document, cells: &[NodeId]) -> bool {
        let Some(grid) = cells
            .first()
            .and_then(|&cell| doc.find_ancestor(cell, NodeKind::is_grid))
        else {
            return false;
        };

        let heading_rows = doc.numeric_attribute(grid, ATTR_HEADING_ROWS, 0);
        let rows_match = self
            .get_row_index_range(doc, cells)
            .is_some_and(|range| range.is_in_same_section(heading_rows));
        if !rows_match {
            return false;
        }

        let heading_columns = doc.numeric_attribute(grid, ATTR_HEADING_COLUMNS, 0);
        self.get_column_index_range(doc, cells)
            .is_some_and(|range| range.is_in_same_section(heading_columns))
    }
}

/// Ranges ordered by their start position
pub fn sort_ranges(doc: &Document, ranges: &[Range]) -> Vec<Range> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| doc.compare_positions(&a.start, &b.start));
    sorted
}

/// Logical index of the row holding `cell`
fn row_index_of(doc: &Document, cell: NodeId) -> Option<usize> {
    let row = doc.parent(cell)?;
    let grid = doc.parent(row)?;
    doc.rows(grid).iter().position(|&r| r == row)
}
