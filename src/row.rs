//! Raw rows returned by the execution collaborator.
//!
//! A [`Row`] is an ordered column-to-value map. Model hydration reads it
//! through typed accessors that fail with descriptive errors instead of
//! panicking:
//!
//! ```rust
//! use quarry::{QueryValue, Row};
//!
//! let row = Row::new()
//!     .with("id", 7i64)
//!     .with("name", "Ada")
//!     .with("deleted_at", QueryValue::Null);
//!
//! assert_eq!(row.get_i64("id").unwrap(), 7);
//! assert_eq!(row.get_str("name").unwrap(), "Ada");
//! assert_eq!(row.get_i64_opt("deleted_at").unwrap(), None);
//! ```

use indexmap::IndexMap;

use crate::error::{QueryError, QueryResult};
use crate::value::QueryValue;

/// One row of a result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, QueryValue>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for backends and tests.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Insert or replace a column value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<QueryValue>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Raw access to a column value.
    pub fn get(&self, column: &str) -> Option<&QueryValue> {
        self.columns.get(column)
    }

    /// Column names in row order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn require(&self, column: &str) -> QueryResult<&QueryValue> {
        self.get(column)
            .ok_or_else(|| QueryError::ColumnNotFound(column.to_string()))
    }

    /// Get an integer column value.
    pub fn get_i64(&self, column: &str) -> QueryResult<i64> {
        match self.require(column)? {
            QueryValue::Int(v) => Ok(*v),
            QueryValue::Null => Err(QueryError::UnexpectedNull(column.to_string())),
            other => Err(mismatch(column, "int", other)),
        }
    }

    /// Get an optional integer column value.
    pub fn get_i64_opt(&self, column: &str) -> QueryResult<Option<i64>> {
        match self.require(column)? {
            QueryValue::Int(v) => Ok(Some(*v)),
            QueryValue::Null => Ok(None),
            other => Err(mismatch(column, "int", other)),
        }
    }

    /// Get a float column value. Integers widen.
    pub fn get_f64(&self, column: &str) -> QueryResult<f64> {
        match self.require(column)? {
            QueryValue::Float(v) => Ok(*v),
            QueryValue::Int(v) => Ok(*v as f64),
            QueryValue::Null => Err(QueryError::UnexpectedNull(column.to_string())),
            other => Err(mismatch(column, "float", other)),
        }
    }

    /// Get an optional float column value. Integers widen.
    pub fn get_f64_opt(&self, column: &str) -> QueryResult<Option<f64>> {
        match self.require(column)? {
            QueryValue::Float(v) => Ok(Some(*v)),
            QueryValue::Int(v) => Ok(Some(*v as f64)),
            QueryValue::Null => Ok(None),
            other => Err(mismatch(column, "float", other)),
        }
    }

    /// Get a boolean column value. Integer 0/1 coerces, since compiled
    /// literals render booleans that way.
    pub fn get_bool(&self, column: &str) -> QueryResult<bool> {
        match self.require(column)? {
            QueryValue::Bool(v) => Ok(*v),
            QueryValue::Int(0) => Ok(false),
            QueryValue::Int(1) => Ok(true),
            QueryValue::Null => Err(QueryError::UnexpectedNull(column.to_string())),
            other => Err(mismatch(column, "bool", other)),
        }
    }

    /// Get a string column value as a borrowed reference.
    pub fn get_str(&self, column: &str) -> QueryResult<&str> {
        match self.require(column)? {
            QueryValue::String(v) => Ok(v),
            QueryValue::Null => Err(QueryError::UnexpectedNull(column.to_string())),
            other => Err(mismatch(column, "string", other)),
        }
    }

    /// Get an optional string column value as a borrowed reference.
    pub fn get_str_opt(&self, column: &str) -> QueryResult<Option<&str>> {
        match self.require(column)? {
            QueryValue::String(v) => Ok(Some(v)),
            QueryValue::Null => Ok(None),
            other => Err(mismatch(column, "string", other)),
        }
    }

    /// Get a string column value as owned.
    pub fn get_string(&self, column: &str) -> QueryResult<String> {
        self.get_str(column).map(str::to_string)
    }
}

impl<C: Into<String>, V: Into<QueryValue>> FromIterator<(C, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(c, v)| (c.into(), v.into()))
                .collect(),
        }
    }
}

fn mismatch(column: &str, expected: &'static str, found: &QueryValue) -> QueryError {
    QueryError::TypeMismatch {
        column: column.to_string(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_is_reported() {
        let row = Row::new();
        assert!(matches!(
            row.get_i64("id"),
            Err(QueryError::ColumnNotFound(c)) if c == "id"
        ));
    }

    #[test]
    fn type_mismatch_names_both_types() {
        let row = Row::new().with("id", "not-a-number");
        let err = row.get_i64("id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "column `id`: expected int, found string"
        );
    }

    #[test]
    fn null_in_required_accessor() {
        let row = Row::new().with("name", QueryValue::Null);
        assert!(matches!(row.get_str("name"), Err(QueryError::UnexpectedNull(_))));
    }

    #[test]
    fn optional_accessors_map_null_to_none() {
        let row = Row::new().with("score", QueryValue::Null);
        assert_eq!(row.get_f64_opt("score").unwrap(), None);
        assert_eq!(row.get_str_opt("score").unwrap(), None);
        assert_eq!(row.get_i64_opt("score").unwrap(), None);
    }

    #[test]
    fn bool_coerces_zero_and_one() {
        let row = Row::new().with("active", 1i64).with("archived", 0i64);
        assert!(row.get_bool("active").unwrap());
        assert!(!row.get_bool("archived").unwrap());
    }

    #[test]
    fn floats_widen_from_int() {
        let row = Row::new().with("score", 3i64);
        assert_eq!(row.get_f64("score").unwrap(), 3.0);
    }

    #[test]
    fn from_iterator_preserves_order() {
        let row: Row = [("b", 1i64), ("a", 2i64)].into_iter().collect();
        let cols: Vec<&str> = row.columns().collect();
        assert_eq!(cols, vec!["b", "a"]);
    }
}
