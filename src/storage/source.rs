use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Access, Record, Table};

/// Equality filter on a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.column, self.value)
    }
}

/// Single-table reads and inserts against the remote store.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch all rows, optionally restricted by `filter`.
    async fn select(&self, table: Table, filter: Option<&Filter>) -> Result<Vec<Record>>;

    /// Fetch exactly one row. Zero or several matches is an error.
    async fn select_single(&self, table: Table, filter: &Filter) -> Result<Record>;

    /// Insert one row and return it as stored.
    async fn insert(&self, table: Table, row: Record) -> Result<Record>;
}

/// The data sources available to resolvers, one per credential.
///
/// Built once at start-up and shared through the schema's data.
#[derive(Clone)]
pub struct Backend {
    public: Arc<dyn DataSource>,
    service: Arc<dyn DataSource>,
}

impl Backend {
    pub fn new(public: Arc<dyn DataSource>, service: Arc<dyn DataSource>) -> Self {
        Self { public, service }
    }

    /// Use one source for both credentials.
    pub fn shared(source: Arc<dyn DataSource>) -> Self {
        Self::new(source.clone(), source)
    }

    pub fn source(&self, access: Access) -> &dyn DataSource {
        match access {
            Access::Public => self.public.as_ref(),
            Access::Service => self.service.as_ref(),
        }
    }

    /// Source used for reads of `table`.
    pub fn reader(&self, table: Table) -> &dyn DataSource {
        self.source(table.read_access())
    }

    /// Source used for inserts.
    pub fn writer(&self) -> &dyn DataSource {
        self.source(Access::Service)
    }
}
