//! Predicate types for building WHERE clauses.
//!
//! A [`Predicate`] is one filter condition contributed to the WHERE clause.
//! The eight variants form a closed set, exhaustively matched at compile
//! time; there is no string-tag dispatch. Rendering is deterministic and goes
//! through the injected [`Escaper`] for every embedded value, including the
//! members of `In`/`NotIn` lists.
//!
//! ```rust
//! use quarry::{DefaultEscaper, Predicate};
//!
//! let p = Predicate::equals("name", "O'Brien");
//! assert_eq!(p.render(&DefaultEscaper).unwrap(), "name = 'O''Brien'");
//! ```

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::error::{QueryError, QueryResult};
use crate::escape::Escaper;
use crate::value::QueryValue;

/// Member values of an `IN` / `NOT IN` predicate.
///
/// Most membership filters carry a handful of values, so the list stays
/// inline up to four members.
pub type ValueList = SmallVec<[QueryValue; 4]>;

/// Ordered column-to-value mapping for `AnyOf` / `AllOf` groups.
///
/// Insertion order is the rendering order.
pub type ColumnMap = IndexMap<String, QueryValue>;

/// One filter condition contributed to the WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column = value`
    Equals(String, QueryValue),
    /// `column != value`
    NotEquals(String, QueryValue),
    /// `column LIKE pattern`
    Like(String, QueryValue),
    /// `column NOT LIKE pattern`
    NotLike(String, QueryValue),
    /// `column IN (v1,v2,...)`
    In(String, ValueList),
    /// `column NOT IN (v1,v2,...)`
    NotIn(String, ValueList),
    /// `(c1 = v1 OR c2 = v2 OR ...)`
    AnyOf(ColumnMap),
    /// `(c1 = v1 AND c2 = v2 AND ...)`
    AllOf(ColumnMap),
}

impl Predicate {
    /// Equality comparison.
    pub fn equals(column: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        Self::Equals(column.into(), value.into())
    }

    /// Negated equality comparison.
    pub fn not_equals(column: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        Self::NotEquals(column.into(), value.into())
    }

    /// Pattern match. The pattern is passed through verbatim (wildcards
    /// included) and escaped like any other value.
    pub fn like(column: impl Into<String>, pattern: impl Into<QueryValue>) -> Self {
        Self::Like(column.into(), pattern.into())
    }

    /// Negated pattern match.
    pub fn not_like(column: impl Into<String>, pattern: impl Into<QueryValue>) -> Self {
        Self::NotLike(column.into(), pattern.into())
    }

    /// Set membership.
    pub fn in_list(
        column: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<QueryValue>>,
    ) -> Self {
        Self::In(column.into(), values.into_iter().map(Into::into).collect())
    }

    /// Negated set membership.
    pub fn not_in_list(
        column: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<QueryValue>>,
    ) -> Self {
        Self::NotIn(column.into(), values.into_iter().map(Into::into).collect())
    }

    /// OR-joined group of equality comparisons.
    pub fn any_of(
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<QueryValue>)>,
    ) -> Self {
        Self::AnyOf(collect_map(pairs))
    }

    /// AND-joined group of equality comparisons.
    pub fn all_of(
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<QueryValue>)>,
    ) -> Self {
        Self::AllOf(collect_map(pairs))
    }

    /// Render this predicate into a SQL fragment.
    ///
    /// Column names are trusted identifiers and are not escaped; every value
    /// is escaped and quoted. Empty member lists and empty groups are
    /// compilation defects: they would otherwise emit `()`.
    pub fn render(&self, escaper: &impl Escaper) -> QueryResult<String> {
        match self {
            Self::Equals(column, value) => {
                Ok(format!("{} = {}", column, literal(value, escaper)))
            }
            Self::NotEquals(column, value) => {
                Ok(format!("{} != {}", column, literal(value, escaper)))
            }
            Self::Like(column, pattern) => {
                Ok(format!("{} LIKE {}", column, literal(pattern, escaper)))
            }
            Self::NotLike(column, pattern) => {
                Ok(format!("{} NOT LIKE {}", column, literal(pattern, escaper)))
            }
            Self::In(column, values) => {
                Ok(format!("{} IN ({})", column, members(column, "IN", values, escaper)?))
            }
            Self::NotIn(column, values) => Ok(format!(
                "{} NOT IN ({})",
                column,
                members(column, "NOT IN", values, escaper)?
            )),
            Self::AnyOf(pairs) => group("AnyOf", pairs, " OR ", escaper),
            Self::AllOf(pairs) => group("AllOf", pairs, " AND ", escaper),
        }
    }
}

fn collect_map(
    pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<QueryValue>)>,
) -> ColumnMap {
    pairs
        .into_iter()
        .map(|(c, v)| (c.into(), v.into()))
        .collect()
}

/// Render a value as an inline literal: escaped and single-quoted, except
/// NULL which must stay a bare keyword.
fn literal(value: &QueryValue, escaper: &impl Escaper) -> String {
    if value.is_null() {
        "NULL".to_string()
    } else {
        format!("'{}'", escaper.escape(&value.literal_text()))
    }
}

fn members(
    column: &str,
    predicate: &'static str,
    values: &ValueList,
    escaper: &impl Escaper,
) -> QueryResult<String> {
    if values.is_empty() {
        return Err(QueryError::EmptyValueList {
            predicate,
            column: column.to_string(),
        });
    }
    let rendered: Vec<String> = values.iter().map(|v| literal(v, escaper)).collect();
    Ok(rendered.join(","))
}

fn group(
    predicate: &'static str,
    pairs: &ColumnMap,
    separator: &str,
    escaper: &impl Escaper,
) -> QueryResult<String> {
    if pairs.is_empty() {
        return Err(QueryError::EmptyGroup { predicate });
    }
    let rendered: Vec<String> = pairs
        .iter()
        .map(|(column, value)| format!("{} = {}", column, literal(value, escaper)))
        .collect();
    Ok(format!("({})", rendered.join(separator)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::escape::DefaultEscaper;
    use crate::error::QueryError;

    #[test]
    fn equals_renders_quoted_value() {
        let p = Predicate::equals("name", "Alice");
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "name = 'Alice'");
    }

    #[test]
    fn not_equals_renders() {
        let p = Predicate::not_equals("status", "archived");
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "status != 'archived'");
    }

    #[test]
    fn integers_render_quoted() {
        let p = Predicate::equals("age", 30);
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "age = '30'");
    }

    #[test]
    fn null_renders_bare() {
        let p = Predicate::equals("deleted_at", QueryValue::Null);
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "deleted_at = NULL");
    }

    #[test]
    fn like_keeps_caller_wildcards() {
        let p = Predicate::like("email", "%@example.com");
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "email LIKE '%@example.com'");
    }

    #[test]
    fn not_like_renders() {
        let p = Predicate::not_like("email", "%@spam.test");
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "email NOT LIKE '%@spam.test'");
    }

    #[test]
    fn in_list_renders_comma_joined() {
        let p = Predicate::in_list("x", [1, 2, 3]);
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "x IN ('1','2','3')");
    }

    #[test]
    fn not_in_list_renders() {
        let p = Predicate::not_in_list("status", ["failed", "stale"]);
        assert_eq!(
            p.render(&DefaultEscaper).unwrap(),
            "status NOT IN ('failed','stale')"
        );
    }

    #[test]
    fn in_members_are_escaped() {
        let p = Predicate::in_list("name", ["safe", "a'); DROP TABLE users; --"]);
        let sql = p.render(&DefaultEscaper).unwrap();
        assert_eq!(sql, "name IN ('safe','a''); DROP TABLE users; --')");
    }

    #[test]
    fn any_of_renders_or_group_in_insertion_order() {
        let p = Predicate::any_of([("a", 1), ("b", 2)]);
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "(a = '1' OR b = '2')");
    }

    #[test]
    fn all_of_renders_and_group_in_insertion_order() {
        let p = Predicate::all_of([("a", 1), ("b", 2)]);
        assert_eq!(p.render(&DefaultEscaper).unwrap(), "(a = '1' AND b = '2')");
    }

    #[test]
    fn empty_in_list_is_a_defect() {
        let p = Predicate::In("x".into(), ValueList::new());
        let err = p.render(&DefaultEscaper).unwrap_err();
        assert!(matches!(err, QueryError::EmptyValueList { predicate: "IN", .. }));
    }

    #[test]
    fn empty_not_in_list_is_a_defect() {
        let p = Predicate::NotIn("x".into(), ValueList::new());
        let err = p.render(&DefaultEscaper).unwrap_err();
        assert!(matches!(err, QueryError::EmptyValueList { predicate: "NOT IN", .. }));
    }

    #[test]
    fn empty_any_of_is_a_defect() {
        let p = Predicate::AnyOf(ColumnMap::new());
        let err = p.render(&DefaultEscaper).unwrap_err();
        assert!(matches!(err, QueryError::EmptyGroup { predicate: "AnyOf" }));
    }

    #[test]
    fn empty_all_of_is_a_defect() {
        let p = Predicate::AllOf(ColumnMap::new());
        let err = p.render(&DefaultEscaper).unwrap_err();
        assert!(matches!(err, QueryError::EmptyGroup { predicate: "AllOf" }));
    }

    #[test]
    fn quote_in_value_cannot_terminate_the_literal() {
        let p = Predicate::equals("name", "O'Brien");
        let sql = p.render(&DefaultEscaper).unwrap();
        assert_eq!(sql, "name = 'O''Brien'");
        // The literal body contains no lone quote.
        let body = sql.strip_prefix("name = '").unwrap().strip_suffix('\'').unwrap();
        assert!(!body.replace("''", "").contains('\''));
    }
}
