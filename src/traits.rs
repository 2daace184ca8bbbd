//! Collaborator contracts: the model layer and the execution primitive.

use crate::error::QueryResult;
use crate::row::Row;

/// Metadata and row hydration for a bound model type.
///
/// Supplied once per model; the query core never inspects a model beyond
/// this contract.
///
/// ```rust
/// use quarry::{Model, QueryResult, Row};
///
/// struct User {
///     id: i64,
///     email: String,
/// }
///
/// impl Model for User {
///     const TABLE_NAME: &'static str = "users";
///     const PRIMARY_KEY: &'static str = "id";
///     const SEARCH_COLUMNS: &'static [&'static str] = &["email"];
///
///     fn from_row(row: &Row) -> QueryResult<Self> {
///         Ok(Self {
///             id: row.get_i64("id")?,
///             email: row.get_string("email")?,
///         })
///     }
/// }
/// ```
pub trait Model: Sized {
    /// The database table name.
    const TABLE_NAME: &'static str;

    /// The primary-key column name.
    const PRIMARY_KEY: &'static str = "id";

    /// Columns a free-text search term matches against.
    const SEARCH_COLUMNS: &'static [&'static str] = &[];

    /// Reconstruct a typed instance from a raw row.
    fn from_row(row: &Row) -> QueryResult<Self>;
}

/// The execution collaborator: issues raw SQL text against the store.
///
/// The backend owns the connection (and any pooling, timeouts, or retries).
/// Errors it returns propagate to the caller unchanged.
pub trait Backend {
    /// Run a SELECT and return its rows. No rows means an empty Vec.
    fn fetch(&self, sql: &str) -> QueryResult<Vec<Row>>;

    /// Run a COUNT statement and return the scalar.
    fn count(&self, sql: &str) -> QueryResult<u64>;
}
