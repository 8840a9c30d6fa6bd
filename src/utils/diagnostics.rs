//! Grid diagnostics
//!
//! Structural edits assume a well-formed grid. This module finds the
//! places where a grid is not:
//!
//! - Grids without rows
//! - Rows without cells
//! - Rows whose occupied width differs from the first row
//! - Columns in which no cell is anchored
//! - Cells whose rowspan reaches past the last row
//! - Heading counts larger than the grid
//!
//! ## Example
//!
//! ```rust
//! use bsgrid::diagnostics::check_grid;
//! use bsgrid::load_grid;
//!
//! let (doc, grid) = load_grid("a | b\nc").unwrap();
//! let result = check_grid(&doc, grid);
//! assert!(result.has_errors());
//! ```

use std::fmt;

use crate::core::grid::{column_count, row_count};
use crate::core::model::{Document, NodeId};
use crate::core::structure::{find_empty_columns, find_empty_rows};
use crate::core::walker::{GridWalker, WalkerOptions};
use crate::data::constants::{ATTR_HEADING_COLUMNS, ATTR_HEADING_ROWS};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - edits still work but may leave odd results
    Warning,
    /// Error - structural edits will produce incorrect grids
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Grid row the message is about
    pub row: Option<usize>,
    /// Grid column the message is about
    pub column: Option<usize>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            row: None,
            column: None,
            suggestion: None,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        match (self.row, self.column) {
            (Some(row), Some(column)) => write!(f, "\n  --> row {}, column {}", row, column)?,
            (Some(row), None) => write!(f, "\n  --> row {}", row)?,
            (None, Some(column)) => write!(f, "\n  --> column {}", column)?,
            (None, None) => {}
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check a grid for structural problems
pub fn check_grid(doc: &Document, grid: NodeId) -> CheckResult {
    let mut result = CheckResult::new();

    let rows = row_count(doc, grid);
    if rows == 0 {
        result.add(Diagnostic::new(DiagnosticLevel::Error, "grid has no rows"));
        return result;
    }
    let width = column_count(doc, grid);

    for row in find_empty_rows(doc, grid) {
        result.add(
            Diagnostic::new(DiagnosticLevel::Warning, "row has no cells")
                .with_row(row)
                .with_suggestion("prune empty rows and columns"),
        );
    }

    // Occupied width of every row, counting slots spanned from above
    let mut widths = vec![0usize; rows];
    let options = WalkerOptions::new().include_all_slots(true);
    for slot in GridWalker::new(doc, grid, options) {
        if let Some(w) = widths.get_mut(slot.row) {
            *w = (*w).max(slot.column + 1);
        }
        if slot.is_anchor() && slot.cell_last_row() >= rows {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!(
                        "cell reaches row {} but the grid has {} rows",
                        slot.cell_last_row(),
                        rows
                    ),
                )
                .with_row(slot.row)
                .with_column(slot.column),
            );
        }
    }
    for (row, &occupied) in widths.iter().enumerate() {
        if occupied != width && occupied > 0 {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Error,
                    format!("row is {} columns wide, expected {}", occupied, width),
                )
                .with_row(row),
            );
        }
    }

    for column in find_empty_columns(doc, grid) {
        result.add(
            Diagnostic::new(DiagnosticLevel::Warning, "no cell is anchored in this column")
                .with_column(column)
                .with_suggestion("prune empty rows and columns"),
        );
    }

    let heading_rows = doc.numeric_attribute(grid, ATTR_HEADING_ROWS, 0);
    if heading_rows > rows {
        result.add(Diagnostic::new(
            DiagnosticLevel::Info,
            format!("{} heading rows in a grid of {} rows", heading_rows, rows),
        ));
    }
    let heading_columns = doc.numeric_attribute(grid, ATTR_HEADING_COLUMNS, 0);
    if heading_columns > width {
        result.add(Diagnostic::new(
            DiagnosticLevel::Info,
            format!(
                "{} heading columns in a grid {} columns wide",
                heading_columns, width
            ),
        ));
    }

    result
}

/// Format diagnostics for display
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
