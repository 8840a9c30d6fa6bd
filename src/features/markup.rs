//! Grid to markup conversion
//!
//! Writes a grid as nested `div` elements:
//!
//! ```text
//! <div class="container">
//!   <div class="row">
//!     <div class="col col-md-6" colspan="2">
//!       <div class="content">
//!         <p>text</p>
//!       </div>
//!     </div>
//!   </div>
//! </div>
//! ```
//!
//! `colspan`/`rowspan` are written only when greater than 1. Breakpoint
//! attributes become classes such as `col-md-6`.

use crate::core::model::{Document, NodeId, NodeKind};
use crate::data::constants::{
    ATTR_COLSPAN, ATTR_ROWSPAN, CLASS_COL, CLASS_CONTAINER, CLASS_CONTENT, CLASS_ROW,
    DEFAULT_BREAKPOINT_VALUE,
};
use crate::features::properties::Breakpoint;

const INDENT: &str = "  ";

/// Markup for `grid`
pub fn to_markup(doc: &Document, grid: NodeId) -> String {
    let mut out = String::new();
    out.push_str(&format!("<div class=\"{}\">\n", CLASS_CONTAINER));

    for row in doc.rows(grid) {
        push_line(&mut out, 1, &format!("<div class=\"{}\">", CLASS_ROW));
        for &cell in doc.children(row) {
            write_cell(doc, cell, &mut out);
        }
        push_line(&mut out, 1, "</div>");
    }

    out.push_str("</div>\n");
    out
}

fn write_cell(doc: &Document, cell: NodeId, out: &mut String) {
    let mut classes = vec![CLASS_COL.to_string()];
    for breakpoint in Breakpoint::ALL {
        if let Some(value) = doc.get_attribute(cell, breakpoint.attribute()) {
            let value = value.to_string();
            if value != DEFAULT_BREAKPOINT_VALUE {
                classes.push(format!("{}-{}", breakpoint.class_prefix(), value));
            }
        }
    }

    let mut open = format!("<div class=\"{}\"", classes.join(" "));
    for key in [ATTR_COLSPAN, ATTR_ROWSPAN] {
        let span = doc.numeric_attribute(cell, key, 1);
        if span > 1 {
            open.push_str(&format!(" {}=\"{}\"", key, span));
        }
    }
    open.push('>');
    push_line(out, 2, &open);

    for &child in doc.children(cell) {
        if *doc.kind(child) == NodeKind::Content {
            push_line(out, 3, &format!("<div class=\"{}\">", CLASS_CONTENT));
            for &block in doc.children(child) {
                push_line(out, 4, &block_markup(doc, block));
            }
            push_line(out, 3, "</div>");
        }
    }

    push_line(out, 2, "</div>");
}

fn block_markup(doc: &Document, block: NodeId) -> String {
    let text = escape_html(&doc.text_content(block));
    match doc.kind(block) {
        NodeKind::Paragraph => format!("<p>{}</p>", text),
        _ => text,
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

/// Escape text for use inside markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
