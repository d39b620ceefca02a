use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{DataSource, Filter};
use crate::error::{Result, ShopError};
use crate::model::{Record, Table};

const ID_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

const ID_LENGTH: usize = 12;

/// In-process tables, used for local development and tests.
///
/// A fixture is a JSON object mapping table names to arrays of rows:
///
/// ```json
/// { "products": [{ "id": "p1", "name": "Tea", "price": "4.50" }] }
/// ```
///
/// Every call is counted per table, and a table can be switched into a
/// failing state to stand in for an unreachable backend.
#[derive(Default)]
pub struct MemorySource {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    tables: HashMap<Table, Vec<Record>>,
    calls: HashMap<Table, usize>,
    failing: HashSet<Table>,
}

impl MemoryState {
    /// Record a call and return the table's rows, unless the table is failing.
    fn enter(&mut self, table: Table) -> Result<&mut Vec<Record>> {
        *self.calls.entry(table).or_default() += 1;
        if self.failing.contains(&table) {
            return Err(ShopError::Backend {
                status: 503,
                message: format!("table {} is unavailable", table),
            });
        }
        Ok(self.tables.entry(table).or_default())
    }
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from fixture JSON text.
    pub fn from_fixture(json: &str) -> Result<Self> {
        let fixture: HashMap<String, Vec<Value>> = serde_json::from_str(json)?;
        let source = Self::new();
        for (name, rows) in fixture {
            source.seed(name.parse()?, rows)?;
        }
        Ok(source)
    }

    /// Load a fixture file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_fixture(&content)
    }

    /// Append rows to a table. Every row must be a JSON object.
    pub fn seed(&self, table: Table, rows: impl IntoIterator<Item = Value>) -> Result<()> {
        let mut state = self.lock();
        let stored = state.tables.entry(table).or_default();
        for row in rows {
            match row {
                Value::Object(record) => stored.push(record),
                other => {
                    return Err(ShopError::Config(format!(
                        "Fixture rows for {} must be objects, got {}",
                        table, other
                    )));
                }
            }
        }
        Ok(())
    }

    /// Current contents of a table.
    pub fn rows(&self, table: Table) -> Vec<Record> {
        self.lock().tables.get(&table).cloned().unwrap_or_default()
    }

    /// Number of adapter calls that touched `table`.
    pub fn calls(&self, table: Table) -> usize {
        self.lock().calls.get(&table).copied().unwrap_or(0)
    }

    /// Total number of adapter calls.
    pub fn total_calls(&self) -> usize {
        self.lock().calls.values().sum()
    }

    /// Make every call on `table` fail until [`MemorySource::recover`].
    pub fn fail(&self, table: Table) {
        self.lock().failing.insert(table);
    }

    pub fn recover(&self, table: Table) {
        self.lock().failing.remove(&table);
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn select(&self, table: Table, filter: Option<&Filter>) -> Result<Vec<Record>> {
        debug!(%table, ?filter, "memory select");
        let mut state = self.lock();
        let rows = state.enter(table)?;
        Ok(rows
            .iter()
            .filter(|row| filter.is_none_or(|f| row_matches(row, f)))
            .cloned()
            .collect())
    }

    async fn select_single(&self, table: Table, filter: &Filter) -> Result<Record> {
        debug!(%table, %filter, "memory select single");
        let mut state = self.lock();
        let rows = state.enter(table)?;
        let mut found = rows.iter().filter(|row| row_matches(row, filter));
        match (found.next(), found.next()) {
            (Some(row), None) => Ok(row.clone()),
            (None, _) => Err(ShopError::NotFound(format!(
                "{}: no row where {}",
                table, filter
            ))),
            (Some(_), Some(_)) => Err(ShopError::Backend {
                status: 406,
                message: format!("{}: several rows where {}", table, filter),
            }),
        }
    }

    async fn insert(&self, table: Table, mut row: Record) -> Result<Record> {
        debug!(%table, "memory insert");
        let mut state = self.lock();
        let rows = state.enter(table)?;
        fill_defaults(table, &mut row);
        rows.push(row.clone());
        Ok(row)
    }
}

/// Column defaults the real schema would apply on insert.
fn fill_defaults(table: Table, row: &mut Record) {
    row.entry("id")
        .or_insert_with(|| Value::String(nanoid::format(nanoid::rngs::default, &ID_ALPHABET, ID_LENGTH)));

    let now = chrono::Utc::now().to_rfc3339();
    let stamped: &[&str] = match table {
        Table::Orders => &["created_at", "updated_at"],
        Table::Users => &["registration_date"],
        _ => &[],
    };
    for column in stamped {
        row.entry(*column)
            .or_insert_with(|| Value::String(now.clone()));
    }
    if table == Table::Users {
        row.entry("balance")
            .or_insert_with(|| Value::String("0.00".to_string()));
    }
}

/// Compare a column to a filter value the way the REST API does, on text.
fn row_matches(row: &Record, filter: &Filter) -> bool {
    match row.get(&filter.column) {
        Some(Value::String(s)) => *s == filter.value,
        Some(Value::Number(n)) => n.to_string() == filter.value,
        Some(Value::Bool(b)) => b.to_string() == filter.value,
        _ => false,
    }
}
