//! Error types for query compilation and execution.
//!
//! Three failure families exist at this layer:
//!
//! - Compilation defects: predicate data that cannot render valid SQL (an
//!   empty `IN` list, an empty `AnyOf` group). These fail fast instead of
//!   emitting `()`.
//! - Hydration failures: a row that does not match the model's expectations.
//! - Backend failures: anything the execution collaborator reports, carried
//!   verbatim. No retry happens here; retry policy belongs to the backend.
//!
//! ```rust
//! use quarry::{QueryError, QueryResult};
//!
//! fn lookup() -> QueryResult<()> {
//!     Err(QueryError::ColumnNotFound("email".into()))
//! }
//!
//! let err = lookup().unwrap_err();
//! assert!(err.to_string().contains("email"));
//! ```

use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error raised while compiling or executing a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// An `IN` / `NOT IN` predicate was built with no member values.
    #[error("{predicate} predicate on column `{column}` has no values")]
    EmptyValueList {
        /// The predicate keyword, e.g. `IN`.
        predicate: &'static str,
        /// The column the predicate targets.
        column: String,
    },

    /// An `AnyOf` / `AllOf` group was built with no column comparisons.
    #[error("{predicate} predicate has no column comparisons")]
    EmptyGroup {
        /// The predicate name, e.g. `AnyOf`.
        predicate: &'static str,
    },

    /// A hydrated row is missing a column the model expects.
    #[error("column `{0}` not found in row")]
    ColumnNotFound(String),

    /// A row column held a different type than the model expects.
    #[error("column `{column}`: expected {expected}, found {found}")]
    TypeMismatch {
        /// The column being read.
        column: String,
        /// The type the accessor asked for.
        expected: &'static str,
        /// The type the row actually held.
        found: &'static str,
    },

    /// A non-nullable accessor hit a NULL column.
    #[error("column `{0}` is unexpectedly NULL")]
    UnexpectedNull(String),

    /// The execution collaborator failed; the source error is untouched.
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    /// Wrap a backend error for verbatim propagation.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_list_names_the_column() {
        let err = QueryError::EmptyValueList {
            predicate: "IN",
            column: "status".into(),
        };
        assert_eq!(err.to_string(), "IN predicate on column `status` has no values");
    }

    #[test]
    fn database_error_preserves_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "gone");
        let err = QueryError::database(inner);
        assert!(err.to_string().contains("gone"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
