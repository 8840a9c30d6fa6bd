//! Plain-text grid notation
//!
//! A compact text form of a grid, used by tests and the command-line tool.
//!
//! ```text
//! @headingRows=1
//! a{c2} | b
//! c{r2} | d | e{colMD=6}
//! f | g
//! ~
//! ```
//!
//! - One row per line; cells are separated by `|`
//! - A cell is its label, optionally followed by `{...}` holding
//!   space-separated `c<n>` (colspan), `r<n>` (rowspan) and
//!   `<breakpoint>=<value>` tokens
//! - `_` is a cell with empty content
//! - `~` is a row without cells
//! - A line starting with `@` sets `headingRows`/`headingColumns` of the grid
//! - Blank lines and lines starting with `#` are ignored
//! - `\` escapes the next character of a label, so `\|`, `\{`, `\}` and
//!   `\\` stand for themselves, `\_` is a literal underscore and `\n` is a
//!   line break. A label's leading `@`, `#` or `~` is written escaped.
//! - Spans are at most [`MAX_SPAN`]
//!
//! Only real cells are written: slots covered by a cell anchored above are
//! left out of their row, exactly as in the document tree.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::grid::GridConfig;
use crate::core::model::{Attributes, ChangeScope, Document, NodeId, NodeKind};
use crate::data::constants::{
    ATTR_COLSPAN, ATTR_HEADING_COLUMNS, ATTR_HEADING_ROWS, ATTR_ROWSPAN, BREAKPOINT_ATTRIBUTES,
    MAX_SPAN,
};
use crate::features::properties::{validate_value, Breakpoint};
use crate::utils::error::{GridError, GridResult};

lazy_static! {
    /// `label` or `label{tokens}`
    static ref CELL_PATTERN: Regex =
        Regex::new(r"^(?P<label>(?:[^{}\\]|\\.)*?)\s*(?:\{(?P<attrs>[^{}]*)\})?$")
            .expect("valid cell pattern");

    /// Span token such as `c2` or `r3`
    static ref SPAN_TOKEN: Regex = Regex::new(r"^(?P<axis>[cr])(?P<count>\d+)$").expect("valid span token");

    /// `name=value` token
    static ref ASSIGN_TOKEN: Regex =
        Regex::new(r"^(?P<name>[A-Za-z]+)=(?P<value>\S+)$").expect("valid assignment token");
}

/// Marker of a cell with empty content
pub const EMPTY_CELL: &str = "_";

/// Marker of a row without cells
pub const EMPTY_ROW: &str = "~";

/// Build a detached grid from notation
pub fn parse_notation(
    scope: &mut ChangeScope<'_>,
    config: &GridConfig,
    text: &str,
) -> GridResult<NodeId> {
    let grid = scope.create_element(NodeKind::Grid, Attributes::new());
    let mut rows = 0;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(settings) = line.strip_prefix('@') {
            parse_grid_settings(scope, grid, settings, line_number)?;
            continue;
        }

        let row = scope.create_element(NodeKind::Row, Attributes::new());
        scope.append(row, grid)?;
        rows += 1;

        if line == EMPTY_ROW {
            continue;
        }

        for raw_cell in split_cells(line) {
            parse_cell(scope, config, row, raw_cell.trim(), line_number)?;
        }
    }

    if rows == 0 {
        return Err(GridError::parse("grid has no rows"));
    }
    Ok(grid)
}

/// Split a row line at every `|` that is not escaped
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '|' => {
                cells.push(&line[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    cells.push(&line[start..]);
    cells
}

fn unescape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut chars = label.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some(next) => out.push(next),
                None => out.push(ch),
            },
            _ => out.push(ch),
        }
    }
    out
}

fn escape_label(text: &str) -> String {
    if text == EMPTY_CELL {
        return format!("\\{}", EMPTY_CELL);
    }

    let mut out = String::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        match ch {
            '\\' | '|' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            '@' | '#' | '~' if index == 0 => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

fn parse_grid_settings(
    scope: &mut ChangeScope<'_>,
    grid: NodeId,
    settings: &str,
    line: usize,
) -> GridResult<()> {
    for token in settings.split_whitespace() {
        let caps = ASSIGN_TOKEN
            .captures(token)
            .ok_or_else(|| GridError::parse_at(format!("invalid grid setting '{}'", token), line))?;
        let name = &caps["name"];
        if name != ATTR_HEADING_ROWS && name != ATTR_HEADING_COLUMNS {
            return Err(GridError::parse_at(
                format!("unknown grid setting '{}'", name),
                line,
            ));
        }
        let value: usize = caps["value"]
            .parse()
            .map_err(|_| GridError::parse_at(format!("'{}' is not a count", &caps["value"]), line))?;
        if value > 0 {
            scope.set_attribute(grid, name, value);
        }
    }
    Ok(())
}

fn parse_cell(
    scope: &mut ChangeScope<'_>,
    config: &GridConfig,
    row: NodeId,
    raw: &str,
    line: usize,
) -> GridResult<()> {
    let caps = CELL_PATTERN
        .captures(raw)
        .ok_or_else(|| GridError::parse_at(format!("invalid cell '{}'", raw), line))?;
    let label = caps.name("label").map_or("", |m| m.as_str());
    if label.is_empty() {
        return Err(GridError::parse_at("cell without a label", line));
    }

    let mut attributes = Attributes::new();
    if let Some(attrs) = caps.name("attrs") {
        for token in attrs.as_str().split_whitespace() {
            parse_cell_token(config, token, &mut attributes, line)?;
        }
    }

    let cell = scope.create_element(NodeKind::Cell, attributes);
    let content = scope.create_element(NodeKind::Content, Attributes::new());
    let paragraph = scope.create_element(NodeKind::Paragraph, Attributes::new());
    if label != EMPTY_CELL {
        let text = scope.create_text(&unescape_label(label));
        scope.append(text, paragraph)?;
    }
    scope.append(paragraph, content)?;
    scope.append(content, cell)?;
    scope.append(cell, row)
}

fn parse_cell_token(
    config: &GridConfig,
    token: &str,
    attributes: &mut Attributes,
    line: usize,
) -> GridResult<()> {
    if let Some(caps) = SPAN_TOKEN.captures(token) {
        let count: usize = caps["count"]
            .parse()
            .map_err(|_| GridError::parse_at(format!("span '{}' is too large", token), line))?;
        if count == 0 {
            return Err(GridError::parse_at("spans start at 1", line));
        }
        if count > MAX_SPAN {
            return Err(GridError::parse_at(
                format!("span '{}' exceeds {}", token, MAX_SPAN),
                line,
            ));
        }
        let key = if &caps["axis"] == "c" {
            ATTR_COLSPAN
        } else {
            ATTR_ROWSPAN
        };
        if count > 1 {
            attributes.insert(key.to_string(), count.into());
        }
        return Ok(());
    }

    if let Some(caps) = ASSIGN_TOKEN.captures(token) {
        let name = &caps["name"];
        let value = &caps["value"];
        let breakpoint = Breakpoint::from_attribute(name).ok_or_else(|| {
            GridError::parse_at(format!("unknown cell attribute '{}'", name), line)
        })?;
        validate_value(breakpoint, value)?;
        if value != config.default_properties.get(breakpoint) {
            attributes.insert(name.to_string(), value.into());
        }
        return Ok(());
    }

    Err(GridError::parse_at(format!("invalid cell attribute '{}'", token), line))
}

/// Write `grid` as notation
pub fn to_notation(doc: &Document, grid: NodeId) -> String {
    let mut lines = Vec::new();

    let settings: Vec<String> = [ATTR_HEADING_ROWS, ATTR_HEADING_COLUMNS]
        .iter()
        .filter_map(|&key| {
            let value = doc.numeric_attribute(grid, key, 0);
            (value > 0).then(|| format!("{}={}", key, value))
        })
        .collect();
    if !settings.is_empty() {
        lines.push(format!("@{}", settings.join(" ")));
    }

    for row in doc.rows(grid) {
        let cells = doc.children(row);
        if cells.is_empty() {
            lines.push(EMPTY_ROW.to_string());
            continue;
        }
        let written: Vec<String> = cells.iter().map(|&cell| cell_notation(doc, cell)).collect();
        lines.push(written.join(" | "));
    }

    lines.join("\n")
}

fn cell_notation(doc: &Document, cell: NodeId) -> String {
    let text = doc.text_content(cell);
    let label = if text.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        escape_label(&text)
    };

    let mut tokens = Vec::new();
    let colspan = doc.numeric_attribute(cell, ATTR_COLSPAN, 1);
    if colspan > 1 {
        tokens.push(format!("c{}", colspan));
    }
    let rowspan = doc.numeric_attribute(cell, ATTR_ROWSPAN, 1);
    if rowspan > 1 {
        tokens.push(format!("r{}", rowspan));
    }
    for attribute in BREAKPOINT_ATTRIBUTES {
        if let Some(value) = doc.get_attribute(cell, attribute) {
            tokens.push(format!("{}={}", attribute, value));
        }
    }

    if tokens.is_empty() {
        label
    } else {
        format!("{}{{{}}}", label, tokens.join(" "))
    }
}
