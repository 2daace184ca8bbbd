//! The accumulated, not-yet-executed description of a query.
//!
//! A [`QuerySpec`] is built once per logical query through a chain of
//! consuming mutators, handed to [`compile`](crate::compiler::compile) or an
//! [`Executor`](crate::executor::Executor), and discarded. It holds no shared
//! state and is never pooled.
//!
//! ```rust
//! use quarry::{QuerySpec, SortOrder};
//!
//! let spec = QuerySpec::new("users")
//!     .r#where("status", "active")
//!     .sort_by("created_at")
//!     .order(SortOrder::Desc)
//!     .limit(20)
//!     .offset(40);
//!
//! assert_eq!(spec.limit, 20);
//! assert_eq!(spec.sort_column, "created_at");
//! ```

use crate::predicate::Predicate;
use crate::traits::Model;
use crate::types::SortOrder;
use crate::value::QueryValue;

/// Mutable builder state for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Maximum rows to return; 0 means unbounded.
    pub limit: u64,
    /// Rows to skip; 0 means no skip.
    pub offset: u64,
    /// The ORDER BY column. Defaults to the bound primary key.
    pub sort_column: String,
    /// The ORDER BY direction.
    pub sort_order: SortOrder,
    /// Free-text search term, if any.
    pub search_term: Option<String>,
    /// Columns the search term matches against.
    pub search_columns: Vec<String>,
    /// Filter clauses in insertion order, AND-conjoined at the top level.
    pub predicates: Vec<Predicate>,
    /// The target table, bound at construction.
    pub table: String,
    /// The primary-key column, bound once before first use.
    pub primary_key: String,
}

impl QuerySpec {
    /// Create a spec for a table. The primary key (and therefore the default
    /// sort column) starts as `id` until [`bind_primary_key`] says otherwise.
    ///
    /// [`bind_primary_key`]: Self::bind_primary_key
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            limit: 0,
            offset: 0,
            sort_column: "id".to_string(),
            sort_order: SortOrder::Asc,
            search_term: None,
            search_columns: Vec::new(),
            predicates: Vec::new(),
            table: table.into(),
            primary_key: "id".to_string(),
        }
    }

    /// Create a spec bound to a model's table, primary key, and searchable
    /// columns.
    pub fn for_model<M: Model>() -> Self {
        let mut spec = Self::new(M::TABLE_NAME);
        spec.bind_primary_key(M::PRIMARY_KEY);
        spec.bind_searchable_fields(M::SEARCH_COLUMNS.iter().map(|c| c.to_string()));
        spec
    }

    /// Bind the columns a [`search`](Self::search) term matches against.
    ///
    /// Configuration, not part of the chain.
    pub fn bind_searchable_fields(&mut self, fields: impl IntoIterator<Item = impl Into<String>>) {
        self.search_columns = fields.into_iter().map(Into::into).collect();
    }

    /// Bind the primary-key column name.
    ///
    /// Configuration, not part of the chain. Binding always resets
    /// `sort_column` to the key, even over an earlier [`sort_by`]: bind
    /// before sorting, or the sort choice is clobbered.
    ///
    /// [`sort_by`]: Self::sort_by
    pub fn bind_primary_key(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.sort_column = name.clone();
        self.primary_key = name;
    }

    /// Cap the number of returned rows. Negative input clamps to 0
    /// (unbounded) rather than underflowing.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = n.max(0) as u64;
        self
    }

    /// Skip rows before the first returned one. Negative input clamps to 0.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = n.max(0) as u64;
        self
    }

    /// Set the sort column. Last write wins.
    pub fn sort_by(mut self, column: impl Into<String>) -> Self {
        self.sort_column = column.into();
        self
    }

    /// Set the sort direction. Last write wins.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Append an equality filter.
    pub fn r#where(self, column: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(Predicate::equals(column, value))
    }

    /// Append a negated equality filter.
    pub fn where_not(self, column: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(Predicate::not_equals(column, value))
    }

    /// Append a pattern-match filter.
    pub fn where_like(self, column: impl Into<String>, pattern: impl Into<QueryValue>) -> Self {
        self.push(Predicate::like(column, pattern))
    }

    /// Append a negated pattern-match filter.
    pub fn where_not_like(self, column: impl Into<String>, pattern: impl Into<QueryValue>) -> Self {
        self.push(Predicate::not_like(column, pattern))
    }

    /// Append a set-membership filter.
    pub fn where_in(
        self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<QueryValue>>,
    ) -> Self {
        self.push(Predicate::in_list(column, values))
    }

    /// Append a negated set-membership filter.
    pub fn where_not_in(
        self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<QueryValue>>,
    ) -> Self {
        self.push(Predicate::not_in_list(column, values))
    }

    /// Append an OR group of equality comparisons.
    pub fn where_any(
        self,
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<QueryValue>)>,
    ) -> Self {
        self.push(Predicate::any_of(pairs))
    }

    /// Append an AND group of equality comparisons.
    pub fn where_all(
        self,
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<QueryValue>)>,
    ) -> Self {
        self.push(Predicate::all_of(pairs))
    }

    /// Set the free-text search term. Does not clear existing predicates;
    /// the search group conjoins with them.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Append an already-built predicate.
    pub fn push(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }
}
