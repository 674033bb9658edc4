//! In-memory store for tests and offline runs.
//!
//! Implements the same contract as the PostgREST adapter: equality filters,
//! ordering with Postgres null placement, embedding through a foreign key
//! (`null` when dangling), single-row inserts. Reads and writes can be made to
//! fail per collection, and every call is counted.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use hive_core::enums::{Collection, SortDirection};
use serde_json::Value;

use crate::error::StoreError;
use crate::query::Select;
use crate::{RemoteStore, Row};

#[derive(Default)]
struct State {
    tables: HashMap<Collection, Vec<Row>>,
    read_failures: HashMap<Collection, String>,
    write_failures: HashMap<Collection, String>,
    selects: Vec<Select>,
}

/// A fake backend holding tables in memory.
///
/// Collections that were never seeded answer reads with `None`, the way the
/// hosted client reports "no data" without an error.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    select_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace `collection`'s rows. Non-object values are skipped.
    #[must_use]
    pub fn with_rows(self, collection: Collection, rows: Vec<Value>) -> Self {
        self.seed(collection, rows);
        self
    }

    /// Replace `collection`'s rows. Non-object values are skipped.
    pub fn seed(&self, collection: Collection, rows: Vec<Value>) {
        let rows = rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        self.state().tables.insert(collection, rows);
    }

    /// Make every read of `collection` fail with `message`.
    pub fn fail_reads(&self, collection: Collection, message: impl Into<String>) {
        self.state()
            .read_failures
            .insert(collection, message.into());
    }

    /// Make every insert into `collection` fail with `message`.
    pub fn fail_writes(&self, collection: Collection, message: impl Into<String>) {
        self.state()
            .write_failures
            .insert(collection, message.into());
    }

    /// Snapshot of `collection`'s rows, including inserted ones.
    #[must_use]
    pub fn rows(&self, collection: Collection) -> Vec<Row> {
        self.state()
            .tables
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of `select` calls made so far, failed ones included.
    #[must_use]
    pub fn select_calls(&self) -> usize {
        self.select_calls.load(AtomicOrdering::SeqCst)
    }

    /// Number of `insert` calls made so far, failed ones included.
    #[must_use]
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(AtomicOrdering::SeqCst)
    }

    /// Every query received, in arrival order.
    #[must_use]
    pub fn selects(&self) -> Vec<Select> {
        self.state().selects.clone()
    }

    fn run_select(state: &State, query: &Select) -> Option<Vec<Row>> {
        let table = state.tables.get(&query.collection)?;

        let mut rows: Vec<Row> = table
            .iter()
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|f| row.get(&f.column).is_some_and(|v| value_matches(v, &f.value)))
            })
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare_nulls_last(a.get(&order.column), b.get(&order.column));
                match order.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        let embedded = query.embed.as_ref().map(|embed| {
            let related = state.tables.get(&embed.collection);
            (embed, related)
        });

        Some(
            rows.into_iter()
                .map(|row| {
                    let mut out = project_columns(row.clone(), &query.columns);
                    if let Some((embed, related)) = embedded {
                        let target = row
                            .get(&embed.foreign_key)
                            .and_then(|key| find_by_id(related, key))
                            .map_or(Value::Null, |r| Value::Object(r.clone()));
                        out.insert(embed.alias().to_string(), target);
                    }
                    out
                })
                .collect(),
        )
    }
}

fn project_columns(row: Row, columns: &[String]) -> Row {
    if columns.is_empty() {
        return row;
    }
    row.into_iter()
        .filter(|(key, _)| columns.iter().any(|c| c == key))
        .collect()
}

fn find_by_id<'a>(rows: Option<&'a Vec<Row>>, key: &Value) -> Option<&'a Row> {
    rows?
        .iter()
        .find(|row| row.get("id").is_some_and(|id| id == key))
}

/// Equality the way PostgREST compares a column to a query-string value.
fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Number(n) => n.to_string() == expected,
        Value::Bool(b) => b.to_string() == expected,
        _ => false,
    }
}

/// Ascending comparison with nulls sorting after every value, as Postgres
/// does by default.
fn compare_nulls_last(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn select(&self, query: &Select) -> Result<Option<Vec<Row>>, StoreError> {
        self.select_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let mut state = self.state();
        state.selects.push(query.clone());

        if let Some(message) = state.read_failures.get(&query.collection) {
            return Err(StoreError::Rejected {
                collection: query.collection,
                message: message.clone(),
            });
        }
        Ok(Self::run_select(&state, query))
    }

    async fn insert(&self, collection: Collection, row: Row) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let mut state = self.state();

        if let Some(message) = state.write_failures.get(&collection) {
            return Err(StoreError::Rejected {
                collection,
                message: message.clone(),
            });
        }
        state.tables.entry(collection).or_default().push(row);
        Ok(())
    }
}
