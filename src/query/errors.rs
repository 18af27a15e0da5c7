//! # Query Errors
//!
//! Request-validation failures raised while parsing a listing or counting
//! request. None of them reach the store.

use thiserror::Error;

/// Result type for query parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// Query parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Parameter present but not of the expected type
    #[error("Invalid value for {param}: {value}")]
    InvalidParam { param: &'static str, value: String },

    /// Enum-typed parameter with a value outside its member set
    #[error("Unknown {param} value: {value}")]
    UnknownEnumValue { param: &'static str, value: String },

    /// Negative page number
    #[error("pageNumber must be >= 0, got {0}")]
    InvalidPageNumber(i64),

    /// Zero or negative page size
    #[error("pageSize must be > 0, got {0}")]
    InvalidPageSize(i64),
}
