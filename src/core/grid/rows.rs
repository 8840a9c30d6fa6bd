//! Row insertion and removal

use indexmap::IndexMap;

use super::content::{create_empty_cell, span_attributes, update_numeric_attribute};
use super::{
    column_count, create_empty_rows, row_count, row_insert_index, GridUtils, InsertRowsOptions,
    RemoveRowsOptions,
};
use crate::core::model::{Attributes, ChangeScope, InsertAt, NodeId, NodeKind, Position, Range};
use crate::core::structure::remove_empty_rows_columns;
use crate::core::walker::{GridSlot, GridWalker, WalkerOptions};
use crate::data::constants::{ATTR_HEADING_ROWS, ATTR_ROWSPAN};
use crate::utils::error::{GridError, GridResult};

/// What a new row holds at a given column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotPlan {
    /// A new cell of this width
    Insert(usize),
    /// Nothing: a cell from above keeps spanning this many columns
    Covered(usize),
}

impl GridUtils {
    /// Insert rows at `options.at`
    ///
    /// Cells from above that span across the insertion point are stretched
    /// over the new rows instead of getting new cells below them.
    pub fn insert_rows(
        &self,
        scope: &mut ChangeScope<'_>,
        grid: NodeId,
        options: InsertRowsOptions,
    ) -> GridResult<()> {
        let InsertRowsOptions {
            at,
            rows: count,
            copy_structure_from_above,
        } = options;
        let rows = row_count(scope, grid);
        let columns = column_count(scope, grid);

        if at > rows {
            return Err(GridError::out_of_range(
                "insert_rows",
                format!("cannot insert at row {} of a grid with {} rows", at, rows),
            ));
        }
        if count == 0 {
            return Ok(());
        }

        let index = row_insert_index(scope, grid, at);

        if copy_structure_from_above.is_none() && (at == 0 || at == rows) {
            create_empty_rows(scope, grid, index, count, columns, self.content())?;
        } else {
            let reference_row = match copy_structure_from_above {
                Some(true) => at.checked_sub(1),
                Some(false) => Some(at),
                None => None,
            };
            let walker_end = reference_row.map_or(at, |reference| reference.max(at));
            let slots: Vec<GridSlot> =
                GridWalker::new(scope, grid, WalkerOptions::new().end_row(walker_end)).collect();

            let mut plan = vec![SlotPlan::Insert(1); columns];
            for slot in slots {
                let last_row = slot.cell_last_row();
                let Some(entry) = plan.get_mut(slot.column) else {
                    continue;
                };

                if slot.row < at && at <= last_row {
                    log::debug!(
                        "insert_rows: stretching cell at ({}, {}) to rowspan {}",
                        slot.row,
                        slot.column,
                        slot.cell_height + count
                    );
                    scope.set_attribute(slot.cell, ATTR_ROWSPAN, slot.cell_height + count);
                    *entry = SlotPlan::Covered(slot.cell_width);
                } else if reference_row.is_some_and(|r| slot.row <= r && r <= last_row) {
                    *entry = SlotPlan::Insert(slot.cell_width);
                }
            }

            for _ in 0..count {
                let row = scope.create_element(NodeKind::Row, Attributes::new());
                scope.insert(row, Position::new(grid, index))?;

                let mut column = 0;
                while let Some(&entry) = plan.get(column) {
                    match entry {
                        SlotPlan::Insert(width) => {
                            let position = scope.position_at(row, InsertAt::End);
                            create_empty_cell(
                                scope,
                                position,
                                span_attributes(width, 1),
                                self.content(),
                            )?;
                            column += width.max(1);
                        }
                        SlotPlan::Covered(width) => column += width.max(1),
                    }
                }
            }
        }

        let heading_rows = scope.numeric_attribute(grid, ATTR_HEADING_ROWS, 0);
        if at < heading_rows {
            update_numeric_attribute(scope, grid, ATTR_HEADING_ROWS, heading_rows + count, 0);
        }
        Ok(())
    }

    /// Remove `options.rows` rows starting at `options.at`
    ///
    /// Cells anchored in the removed range that reach below it are moved to
    /// the first surviving row; cells reaching into the range from above are
    /// shortened. Rows and columns left without anchored cells are pruned.
    pub fn remove_rows(
        &self,
        scope: &mut ChangeScope<'_>,
        grid: NodeId,
        options: RemoveRowsOptions,
    ) -> GridResult<()> {
        let RemoveRowsOptions { at: first, rows: count } = options;
        let rows = row_count(scope, grid);

        if count == 0 {
            return Ok(());
        }
        let last = first + count - 1;
        if last >= rows {
            return Err(GridError::out_of_range(
                "remove_rows",
                format!(
                    "rows {}..={} do not fit in a grid with {} rows",
                    first, last, rows
                ),
            ));
        }

        remove_rows_unpruned(scope, grid, first, last)?;
        remove_empty_rows_columns(scope, grid)
    }
}

/// Remove rows `first..=last` without pruning afterwards
pub(crate) fn remove_rows_unpruned(
    scope: &mut ChangeScope<'_>,
    grid: NodeId,
    first: usize,
    last: usize,
) -> GridResult<()> {
    // Everything is measured before the tree changes
    let mut to_move: IndexMap<usize, (NodeId, usize)> = IndexMap::new();
    let mut to_trim: Vec<(NodeId, usize)> = Vec::new();

    for slot in GridWalker::new(scope, grid, WalkerOptions::new().end_row(last)) {
        let last_row = slot.cell_last_row();

        if slot.row >= first && slot.row <= last && last_row > last {
            let rowspan_in_removed = last - slot.row + 1;
            to_move.insert(slot.column, (slot.cell, slot.cell_height - rowspan_in_removed));
        }

        if slot.row < first && last_row >= first {
            let adjustment = if last_row >= last {
                last - first + 1
            } else {
                last_row - first + 1
            };
            to_trim.push((slot.cell, slot.cell_height - adjustment));
        }
    }

    if !to_move.is_empty() {
        move_cells_to_row(scope, grid, last + 1, &to_move)?;
    }

    let row_nodes = scope.rows(grid);
    for index in (first..=last).rev() {
        if let Some(&row) = row_nodes.get(index) {
            scope.remove(row)?;
        }
    }

    for (cell, rowspan) in to_trim {
        log::debug!("remove_rows: trimming cell {} to rowspan {}", cell, rowspan);
        update_numeric_attribute(scope, cell, ATTR_ROWSPAN, rowspan, 1);
    }

    adjust_heading_rows(scope, grid, first, last);
    Ok(())
}

/// Move cells sticking out of the removed rows into row `target`
fn move_cells_to_row(
    scope: &mut ChangeScope<'_>,
    grid: NodeId,
    target: usize,
    to_move: &IndexMap<usize, (NodeId, usize)>,
) -> GridResult<()> {
    let Some(&row) = scope.rows(grid).get(target) else {
        log::debug!("remove_rows: no row {} to move spanning cells into", target);
        return Ok(());
    };

    let options = WalkerOptions::new().row(target).include_all_slots(true);
    let slots: Vec<GridSlot> = GridWalker::new(scope, grid, options).collect();

    let mut previous: Option<NodeId> = None;
    for slot in slots {
        if let Some(&(cell, rowspan)) = to_move.get(&slot.column) {
            let position = match previous {
                Some(previous) => scope
                    .position_after(previous)
                    .ok_or_else(|| GridError::not_found(format!("parent of cell {}", previous)))?,
                None => Position::new(row, 0),
            };
            let range = Range::on(scope, cell)
                .ok_or_else(|| GridError::not_found(format!("parent of cell {}", cell)))?;

            log::debug!(
                "remove_rows: moving cell {} into row {} with rowspan {}",
                cell,
                target,
                rowspan
            );
            scope.move_node(range, position)?;
            update_numeric_attribute(scope, cell, ATTR_ROWSPAN, rowspan, 1);
            previous = Some(cell);
        } else if slot.is_anchor() {
            previous = Some(slot.cell);
        }
    }
    Ok(())
}

fn adjust_heading_rows(scope: &mut ChangeScope<'_>, grid: NodeId, first: usize, last: usize) {
    let heading_rows = scope.numeric_attribute(grid, ATTR_HEADING_ROWS, 0);
    if first < heading_rows {
        let new_rows = if last < heading_rows {
            heading_rows - (last - first + 1)
        } else {
            first
        };
        update_numeric_attribute(scope, grid, ATTR_HEADING_ROWS, new_rows, 0);
    }
}
