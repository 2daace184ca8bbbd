//! Query execution: count-vs-fetch dispatch and row hydration.
//!
//! The [`Executor`] owns nothing but its injected collaborators: the
//! [`Backend`] that runs SQL text and the [`Escaper`] that neutralizes
//! values. Each call is one synchronous round trip; backend failures
//! propagate unchanged.

use std::marker::PhantomData;

use tracing::debug;

use crate::compiler::compile;
use crate::error::QueryResult;
use crate::escape::Escaper;
use crate::spec::QuerySpec;
use crate::traits::{Backend, Model};

/// Executes compiled queries for one model type.
///
/// ```rust,ignore
/// let executor = Executor::<_, _, User>::new(backend, DefaultEscaper);
/// let active = executor.find(&QuerySpec::for_model::<User>().r#where("status", "active"))?;
/// let total = executor.total_count(&QuerySpec::for_model::<User>())?;
/// ```
pub struct Executor<B: Backend, E: Escaper, M: Model> {
    backend: B,
    escaper: E,
    _model: PhantomData<M>,
}

impl<B: Backend, E: Escaper, M: Model> Executor<B, E, M> {
    /// Create an executor over the given collaborators.
    pub fn new(backend: B, escaper: E) -> Self {
        Self {
            backend,
            escaper,
            _model: PhantomData,
        }
    }

    /// Fetch matching rows and hydrate them into model instances.
    ///
    /// Result order is server-determined by the compiled ORDER BY. No
    /// matches hydrate to an empty Vec, never an absent value.
    pub fn find(&self, spec: &QuerySpec) -> QueryResult<Vec<M>> {
        let stmt = compile(spec, &self.escaper)?;
        let sql = stmt.select_sql(&spec.table);
        debug!(table = %spec.table, sql = %sql, "executing find");

        let rows = self.backend.fetch(&sql)?;
        rows.iter().map(M::from_row).collect()
    }

    /// Count rows over the full filtered set.
    ///
    /// Applies the same filter and search logic as [`find`](Self::find) but
    /// ignores sort, limit, and offset entirely.
    pub fn total_count(&self, spec: &QuerySpec) -> QueryResult<u64> {
        let stmt = compile(spec, &self.escaper)?;
        let sql = stmt.count_sql(&spec.table);
        debug!(table = %spec.table, sql = %sql, "executing count");

        self.backend.count(&sql)
    }
}
