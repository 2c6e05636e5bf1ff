// ABOUTME: Error types for document loading and selection operations.
// ABOUTME: Provides the QueryError enum and the crate-wide Result alias.

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = QueryError> = std::result::Result<T, E>;

/// Errors that can occur while loading a document or querying a selection.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The document string could not be parsed.
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// The selector engine rejected a CSS selector string.
    #[error("invalid selector: {selector:?}")]
    Selector { selector: String },

    /// A first-element accessor was called on an empty selection.
    #[error("empty selection: no element to take {op} from")]
    EmptyResult { op: &'static str },

    /// An unknown element property name.
    #[error("unknown element property: {0:?}")]
    Property(String),

    /// An unsupported MIME type string.
    #[error("unsupported MIME type: {0:?}")]
    Mime(String),
}

impl QueryError {
    /// Creates a Parse error from an underlying parser error.
    pub fn parse(err: impl fmt::Display) -> Self {
        QueryError::Parse(err.to_string())
    }

    /// Creates a Selector error for a rejected selector string.
    pub fn selector(selector: impl Into<String>) -> Self {
        QueryError::Selector {
            selector: selector.into(),
        }
    }

    pub(crate) fn empty(op: &'static str) -> Self {
        QueryError::EmptyResult { op }
    }
}
