//! Error types for recordscan
//!
//! Provides a unified error type for all query operations.

use thiserror::Error;

use crate::query::Column;

/// Result type alias using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;

/// Unified error type for recordscan operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    // -------------------------------------------------------------------------
    // Match Value Errors
    // -------------------------------------------------------------------------
    #[error("cannot parse {value:?} for {column}: {reason}")]
    Parse {
        column: Column,
        value: String,
        reason: String,
    },

    // -------------------------------------------------------------------------
    // Selector Errors
    // -------------------------------------------------------------------------
    #[error("selector {selector:?} is too short to carry a column discriminant")]
    InvalidSelector { selector: String },

    #[error("selector {selector:?} names unknown column {discriminant:?}")]
    UnknownColumn {
        selector: String,
        discriminant: char,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
