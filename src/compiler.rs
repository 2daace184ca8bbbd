//! Pure translation from a [`QuerySpec`] to SQL text fragments.
//!
//! The compiler renders WHERE, ORDER BY, LIMIT, and OFFSET independently and
//! only concatenates them at statement-assembly time. WHERE assembly builds
//! an ordered fragment list and joins it with ` AND `; there is no trailing
//! conjunction to trim.
//!
//! ```rust
//! use quarry::{DefaultEscaper, QuerySpec, SortOrder, compile};
//!
//! let spec = QuerySpec::new("users")
//!     .r#where("status", "active")
//!     .order(SortOrder::Desc)
//!     .limit(10);
//!
//! let stmt = compile(&spec, &DefaultEscaper).unwrap();
//! assert_eq!(stmt.where_sql, "WHERE status = 'active'");
//! assert_eq!(stmt.order_sql, "ORDER BY id DESC");
//! assert_eq!(stmt.limit_sql, "LIMIT 10");
//! assert_eq!(stmt.offset_sql, "");
//! assert_eq!(
//!     stmt.select_sql("users"),
//!     "SELECT * FROM users WHERE status = 'active' ORDER BY id DESC LIMIT 10"
//! );
//! ```

use crate::error::QueryResult;
use crate::escape::Escaper;
use crate::spec::QuerySpec;

/// The four independently rendered clause fragments of one query.
///
/// Absent clauses are empty strings; `order_sql` is always present because
/// ordering is unconditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStatement {
    /// `WHERE ...`, or empty when nothing filters.
    pub where_sql: String,
    /// `ORDER BY column direction`, always rendered.
    pub order_sql: String,
    /// `LIMIT n`, or empty when the limit is 0 (unbounded).
    pub limit_sql: String,
    /// `OFFSET n`, or empty when the offset is 0.
    pub offset_sql: String,
}

impl CompiledStatement {
    /// Assemble the full fetch statement.
    pub fn select_sql(&self, table: &str) -> String {
        let mut sql = String::with_capacity(
            20 + table.len()
                + self.where_sql.len()
                + self.order_sql.len()
                + self.limit_sql.len()
                + self.offset_sql.len(),
        );
        sql.push_str("SELECT * FROM ");
        sql.push_str(table);
        for clause in [
            &self.where_sql,
            &self.order_sql,
            &self.limit_sql,
            &self.offset_sql,
        ] {
            if !clause.is_empty() {
                sql.push(' ');
                sql.push_str(clause);
            }
        }
        sql
    }

    /// Assemble the count statement. Counting is always over the full
    /// filtered set: no ordering, no pagination.
    pub fn count_sql(&self, table: &str) -> String {
        let mut sql = String::with_capacity(22 + table.len() + self.where_sql.len());
        sql.push_str("SELECT COUNT(*) FROM ");
        sql.push_str(table);
        if !self.where_sql.is_empty() {
            sql.push(' ');
            sql.push_str(&self.where_sql);
        }
        sql
    }
}

/// Compile a spec into its clause fragments.
///
/// The search group (when a term is set and search columns are bound) counts
/// as the first WHERE fragment; predicates follow in insertion order. An
/// empty predicate list with no search term yields no WHERE clause at all,
/// not `WHERE TRUE`.
pub fn compile(spec: &QuerySpec, escaper: &impl Escaper) -> QueryResult<CompiledStatement> {
    let mut fragments: Vec<String> = Vec::with_capacity(spec.predicates.len() + 1);

    if let Some(term) = &spec.search_term {
        if !spec.search_columns.is_empty() {
            fragments.push(search_group(term, &spec.search_columns, escaper));
        }
    }

    for predicate in &spec.predicates {
        fragments.push(predicate.render(escaper)?);
    }

    let where_sql = if fragments.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", fragments.join(" AND "))
    };

    let order_sql = format!("ORDER BY {} {}", spec.sort_column, spec.sort_order.as_sql());

    let limit_sql = if spec.limit > 0 {
        format!("LIMIT {}", spec.limit)
    } else {
        String::new()
    };
    let offset_sql = if spec.offset > 0 {
        format!("OFFSET {}", spec.offset)
    } else {
        String::new()
    };

    Ok(CompiledStatement {
        where_sql,
        order_sql,
        limit_sql,
        offset_sql,
    })
}

/// Parenthesized OR group of `column LIKE '%term%'` over every search
/// column. Only the term is escaped; columns are trusted identifiers.
fn search_group(term: &str, columns: &[String], escaper: &impl Escaper) -> String {
    let escaped = escaper.escape(term);
    let parts: Vec<String> = columns
        .iter()
        .map(|column| format!("{} LIKE '%{}%'", column, escaped))
        .collect();
    format!("({})", parts.join(" OR "))
}
