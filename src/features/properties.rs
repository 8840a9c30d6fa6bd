//! Column properties
//!
//! Responsive breakpoint attributes of grid cells and the command that
//! reads and writes them for the cells affected by a selection.
//!
//! Each breakpoint has its own attribute on a cell:
//! - `col`: base width
//! - `colSM`, `colMD`, `colLG`, `colXL`, `colXXL`: width from that tier up
//!
//! Values are the column counts `"0"` to `"12"`, where `"0"` means unset.

use std::fmt;

use crate::core::grid::GridUtils;
use crate::core::model::{ChangeScope, Document, NodeId, Selection};
use crate::data::constants::{
    is_valid_column_value, BREAKPOINT_ATTRIBUTES, BREAKPOINT_CLASS_PREFIXES,
    DEFAULT_BREAKPOINT_VALUE,
};
use crate::utils::error::{GridError, GridResult};

/// Responsive width tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// All tiers in ascending width order
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Model attribute name
    pub fn attribute(self) -> &'static str {
        BREAKPOINT_ATTRIBUTES[self as usize]
    }

    /// Markup class prefix (`col-md` for `Md`)
    pub fn class_prefix(self) -> &'static str {
        BREAKPOINT_CLASS_PREFIXES
            .get(self.attribute())
            .copied()
            .unwrap_or("col")
    }

    /// Look up a tier by attribute name
    pub fn from_attribute(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.attribute() == name)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// Default value per breakpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointProperties {
    values: [String; 6],
}

impl Default for BreakpointProperties {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| DEFAULT_BREAKPOINT_VALUE.to_string()),
        }
    }
}

impl BreakpointProperties {
    pub fn get(&self, breakpoint: Breakpoint) -> &str {
        &self.values[breakpoint as usize]
    }

    /// Set a default, rejecting values outside `0..=12`
    pub fn set(&mut self, breakpoint: Breakpoint, value: &str) -> GridResult<()> {
        validate_value(breakpoint, value)?;
        self.values[breakpoint as usize] = value.to_string();
        Ok(())
    }

    pub fn with(mut self, breakpoint: Breakpoint, value: &str) -> GridResult<Self> {
        self.set(breakpoint, value)?;
        Ok(self)
    }
}

/// Check that `value` is allowed for `breakpoint`
pub fn validate_value(breakpoint: Breakpoint, value: &str) -> GridResult<()> {
    if is_valid_column_value(value) {
        Ok(())
    } else {
        Err(GridError::invalid_value(breakpoint.attribute(), value))
    }
}

/// Value of a breakpoint attribute on `cell`, `None` when unset or default
pub fn cell_breakpoint_value(
    doc: &Document,
    cell: NodeId,
    breakpoint: Breakpoint,
    default_value: &str,
) -> Option<String> {
    let value = doc.get_attribute(cell, breakpoint.attribute())?.to_string();
    (value != default_value).then_some(value)
}

/// Observable state of a [`ColumnPropertyCommand`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandState {
    pub is_enabled: bool,
    /// The value shared by every affected cell, if they agree
    pub value: Option<String>,
}

/// Reads and writes one breakpoint attribute on the cells affected by a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPropertyCommand {
    pub breakpoint: Breakpoint,
    pub default_value: String,
}

impl ColumnPropertyCommand {
    pub fn new(breakpoint: Breakpoint, default_value: impl Into<String>) -> Self {
        Self {
            breakpoint,
            default_value: default_value.into(),
        }
    }

    /// Command for `breakpoint` with the default taken from the facade config
    pub fn for_breakpoint(utils: &GridUtils, breakpoint: Breakpoint) -> Self {
        Self::new(
            breakpoint,
            utils.config().default_properties.get(breakpoint),
        )
    }

    /// Enabled when the selection touches a cell; the value is the one every
    /// affected cell shares
    pub fn refresh(&self, utils: &GridUtils, doc: &Document, selection: &Selection) -> CommandState {
        let cells = utils.get_selection_affected_cells(doc, selection);
        let Some((&first, rest)) = cells.split_first() else {
            return CommandState::default();
        };

        let first_value = self.cell_value(doc, first);
        let shared = rest.iter().all(|&cell| self.cell_value(doc, cell) == first_value);

        CommandState {
            is_enabled: true,
            value: if shared { first_value } else { None },
        }
    }

    /// Set the attribute on every affected cell
    ///
    /// A missing value, or one equal to the default, removes the attribute.
    pub fn execute(
        &self,
        utils: &GridUtils,
        scope: &mut ChangeScope<'_>,
        selection: &Selection,
        value: Option<&str>,
    ) -> GridResult<()> {
        let value = value.filter(|v| *v != self.default_value);
        if let Some(v) = value {
            validate_value(self.breakpoint, v)?;
        }

        let cells = utils.get_selection_affected_cells(scope, selection);
        for cell in cells {
            match value {
                Some(v) => scope.set_attribute(cell, self.breakpoint.attribute(), v),
                None => scope.remove_attribute(cell, self.breakpoint.attribute()),
            }
        }
        Ok(())
    }

    fn cell_value(&self, doc: &Document, cell: NodeId) -> Option<String> {
        cell_breakpoint_value(doc, cell, self.breakpoint, &self.default_value)
    }
}
