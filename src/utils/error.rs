//! Error handling for grid operations
//!
//! This module provides a unified error type and result type for all
//! grid mutations, queries and conversions.

use thiserror::Error;

/// Grid operation error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row or column index (or index range) lies outside the grid
    #[error("{operation}: index out of range: {message}")]
    OutOfRange {
        operation: &'static str,
        message: String,
    },
    /// An argument that cannot be applied to the given node
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
    /// An attribute value outside of its allowed set
    #[error("Invalid value '{value}' for attribute '{attribute}'")]
    InvalidValue { attribute: String, value: String },
    /// A node that was expected in the document is missing
    #[error("Not found: {what}")]
    NotFound { what: String },
    /// Grid notation could not be parsed
    #[error("{}", format_parse(.message, .line))]
    Parse {
        message: String,
        line: Option<usize>,
    },
}

fn format_parse(message: &str, line: &Option<usize>) -> String {
    match line {
        Some(l) => format!("Parse error at line {}: {}", l, message),
        None => format!("Parse error: {}", message),
    }
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

// Convenience constructors for errors
impl GridError {
    pub fn out_of_range(operation: &'static str, message: impl Into<String>) -> Self {
        GridError::OutOfRange {
            operation,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        GridError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_value(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        GridError::InvalidValue {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        GridError::NotFound { what: what.into() }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        GridError::Parse {
            message: message.into(),
            line: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize) -> Self {
        GridError::Parse {
            message: message.into(),
            line: Some(line),
        }
    }

    /// Whether this error is a caller-contract range violation
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, GridError::OutOfRange { .. })
    }
}
