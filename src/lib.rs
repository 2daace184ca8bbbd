//! # quarry
//!
//! Fluent SQL query construction, compilation, and row hydration.
//!
//! A [`QuerySpec`] accumulates filters, sort order, and pagination through a
//! builder chain; [`compile`] turns it into deterministic, injection-safe SQL
//! fragments; an [`Executor`] runs the statement against an injected
//! [`Backend`] and hydrates rows into [`Model`] instances.
//!
//! ## Building a query
//!
//! ```rust
//! use quarry::{QuerySpec, SortOrder};
//!
//! let spec = QuerySpec::new("users")
//!     .r#where("status", "active")
//!     .where_in("role", ["admin", "moderator"])
//!     .sort_by("created_at")
//!     .order(SortOrder::Desc)
//!     .limit(20);
//! ```
//!
//! ## Compiling to SQL
//!
//! Values are embedded as inline literals, every one passed through the
//! injected [`Escaper`]:
//!
//! ```rust
//! use quarry::{DefaultEscaper, QuerySpec, compile};
//!
//! let spec = QuerySpec::new("users").r#where("name", "O'Brien");
//! let stmt = compile(&spec, &DefaultEscaper).unwrap();
//!
//! assert_eq!(stmt.where_sql, "WHERE name = 'O''Brien'");
//! assert_eq!(
//!     stmt.select_sql("users"),
//!     "SELECT * FROM users WHERE name = 'O''Brien' ORDER BY id ASC"
//! );
//! assert_eq!(stmt.count_sql("users"), "SELECT COUNT(*) FROM users WHERE name = 'O''Brien'");
//! ```
//!
//! ## Free-text search
//!
//! A search term fans out across the bound searchable columns as an OR
//! group, conjoined with any other predicates:
//!
//! ```rust
//! use quarry::{DefaultEscaper, QuerySpec, compile};
//!
//! let mut spec = QuerySpec::new("posts");
//! spec.bind_searchable_fields(["title", "body"]);
//! let spec = spec.search("rust");
//!
//! let stmt = compile(&spec, &DefaultEscaper).unwrap();
//! assert_eq!(
//!     stmt.where_sql,
//!     "WHERE (title LIKE '%rust%' OR body LIKE '%rust%')"
//! );
//! ```
//!
//! ## Predicates
//!
//! Eight closed variants cover equality, negation, pattern match, set
//! membership, and nested boolean groups:
//!
//! ```rust
//! use quarry::{DefaultEscaper, Predicate};
//!
//! let p = Predicate::any_of([("a", 1), ("b", 2)]);
//! assert_eq!(p.render(&DefaultEscaper).unwrap(), "(a = '1' OR b = '2')");
//!
//! let p = Predicate::in_list("x", [1, 2, 3]);
//! assert_eq!(p.render(&DefaultEscaper).unwrap(), "x IN ('1','2','3')");
//! ```
//!
//! ## Execution
//!
//! The executor is synchronous and request-scoped: one spec, one statement,
//! one blocking round trip. `find` hydrates rows; `total_count` runs the same
//! filter logic without ordering or pagination. See [`Executor`].

pub mod compiler;
pub mod error;
pub mod escape;
pub mod executor;
pub mod logging;
pub mod predicate;
pub mod row;
pub mod spec;
pub mod traits;
pub mod types;
pub mod value;

pub use compiler::{CompiledStatement, compile};
pub use error::{QueryError, QueryResult};
pub use escape::{DefaultEscaper, EscapeFn, Escaper};
pub use executor::Executor;
pub use predicate::{ColumnMap, Predicate, ValueList};
pub use row::Row;
pub use spec::QuerySpec;
pub use traits::{Backend, Model};
pub use types::SortOrder;
pub use value::QueryValue;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compiler::{CompiledStatement, compile};
    pub use crate::error::{QueryError, QueryResult};
    pub use crate::escape::{DefaultEscaper, EscapeFn, Escaper};
    pub use crate::executor::Executor;
    pub use crate::predicate::Predicate;
    pub use crate::row::Row;
    pub use crate::spec::QuerySpec;
    pub use crate::traits::{Backend, Model};
    pub use crate::types::SortOrder;
    pub use crate::value::QueryValue;
}
