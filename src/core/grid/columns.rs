//! Column insertion and removal

use super::content::update_numeric_attribute;
use super::{column_count, create_cells, GridUtils, InsertColumnsOptions, RemoveColumnsOptions};
use crate::core::model::{ChangeScope, NodeId, Position};
use crate::core::structure::remove_empty_rows_columns;
use crate::core::walker::{GridSlot, GridWalker, WalkerOptions};
use crate::data::constants::{ATTR_COLSPAN, ATTR_HEADING_COLUMNS};
use crate::utils::error::{GridError, GridResult};

/// Change collected while walking the insertion column
enum ColumnEdit {
    Widen { cell: NodeId, colspan: usize },
    InsertBefore(Position),
}

impl GridUtils {
    /// Insert `options.columns` columns before column `options.at`
    ///
    /// Cells spanning across the insertion point are widened; every other
    /// row gets new cells at the insertion column.
    pub fn insert_columns(
        &self,
        scope: &mut ChangeScope<'_>,
        grid: NodeId,
        options: InsertColumnsOptions,
    ) -> GridResult<()> {
        let InsertColumnsOptions { at, columns: count } = options;
        let width = column_count(scope, grid);

        if at > width {
            return Err(GridError::out_of_range(
                "insert_columns",
                format!("cannot insert at column {} of a grid {} columns wide", at, width),
            ));
        }
        if count == 0 {
            return Ok(());
        }

        if at == 0 || at == width {
            for row in scope.rows(grid) {
                let position = if at == 0 {
                    Position::new(row, 0)
                } else {
                    Position::new(row, scope.child_count(row))
                };
                create_cells(scope, count, position, self.content())?;
            }
        } else {
            let mut edits = Vec::new();
            {
                let options = WalkerOptions::new().column(at).include_all_slots(true);
                let mut walker = GridWalker::new(scope, grid, options);

                while let Some(slot) = walker.next() {
                    if slot.cell_anchor_column < at {
                        // Spans across the new columns; rows it covers need nothing else
                        edits.push(ColumnEdit::Widen {
                            cell: slot.cell,
                            colspan: slot.cell_width + count,
                        });
                        for row in slot.row..=slot.cell_last_row() {
                            walker.skip_row(row);
                        }
                    } else {
                        edits.push(ColumnEdit::InsertBefore(slot.position_before()));
                    }
                }
            }

            for edit in edits {
                match edit {
                    ColumnEdit::Widen { cell, colspan } => {
                        log::debug!("insert_columns: widening cell {} to colspan {}", cell, colspan);
                        scope.set_attribute(cell, ATTR_COLSPAN, colspan);
                    }
                    ColumnEdit::InsertBefore(position) => {
                        create_cells(scope, count, position, self.content())?;
                    }
                }
            }
        }

        let heading_columns = scope.numeric_attribute(grid, ATTR_HEADING_COLUMNS, 0);
        if at < heading_columns {
            update_numeric_attribute(
                scope,
                grid,
                ATTR_HEADING_COLUMNS,
                heading_columns + count,
                0,
            );
        }
        Ok(())
    }

    /// Remove `options.columns` columns starting at `options.at`
    pub fn remove_columns(
        &self,
        scope: &mut ChangeScope<'_>,
        grid: NodeId,
        options: RemoveColumnsOptions,
    ) -> GridResult<()> {
        let RemoveColumnsOptions { at: first, columns: count } = options;
        let width = column_count(scope, grid);

        if count == 0 {
            return Ok(());
        }
        let last = first + count - 1;
        if last >= width {
            return Err(GridError::out_of_range(
                "remove_columns",
                format!(
                    "columns {}..={} do not fit in a grid {} columns wide",
                    first, last, width
                ),
            ));
        }

        remove_columns_unpruned(scope, grid, first, last)?;
        remove_empty_rows_columns(scope, grid)
    }
}

/// Remove columns `first..=last` without pruning afterwards
pub(crate) fn remove_columns_unpruned(
    scope: &mut ChangeScope<'_>,
    grid: NodeId,
    first: usize,
    last: usize,
) -> GridResult<()> {
    for removed in (first..=last).rev() {
        let slots: Vec<GridSlot> = GridWalker::anchors(scope, grid).collect();

        for slot in slots {
            if slot.column <= removed && slot.cell_width > 1 && slot.column + slot.cell_width > removed
            {
                update_numeric_attribute(scope, slot.cell, ATTR_COLSPAN, slot.cell_width - 1, 1);
            } else if slot.column == removed {
                scope.remove(slot.cell)?;
            }
        }
    }

    let heading_columns = scope.numeric_attribute(grid, ATTR_HEADING_COLUMNS, 0);
    if first < heading_columns {
        let removed = if last < heading_columns {
            last - first + 1
        } else {
            heading_columns - first
        };
        update_numeric_attribute(
            scope,
            grid,
            ATTR_HEADING_COLUMNS,
            heading_columns - removed,
            0,
        );
    }
    Ok(())
}
