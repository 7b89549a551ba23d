use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    path::Path,
};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    errors::{Error, Result},
    store::{Collection, OrderBy, RecordStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    FetchAll,
    Insert,
    UpdateField,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCall {
    pub op: StoreOp,
    pub collection: Collection,
}

/// Shape of `TRACKER_SEED_FILE`.
#[derive(Deserialize, Debug, Default)]
pub struct SeedFile {
    #[serde(default)]
    pub invitations: Vec<Value>,
    #[serde(default)]
    pub sales_reps: Vec<Value>,
    #[serde(default)]
    pub cohorts: Vec<Value>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: HashMap<Collection, Vec<Value>>,
    next_id: u64,
    calls: Vec<StoreCall>,
    failures: HashSet<(Collection, StoreOp)>,
}

impl Inner {
    fn record(&mut self, op: StoreOp, collection: Collection) -> Result<()> {
        self.calls.push(StoreCall { op, collection });
        if self.failures.contains(&(collection, op)) {
            return Err(Error::StoreRejected(format!(
                "{} {:?} rejected",
                collection.table(),
                op
            )));
        }
        Ok(())
    }

    fn push(&mut self, collection: Collection, mut row: Value) {
        if let Value::Object(fields) = &mut row {
            let has_id = fields.get("id").is_some_and(|id| !id.is_null());
            if !has_id {
                self.next_id += 1;
                fields.insert("id".to_string(), Value::String(self.next_id.to_string()));
            } else if let Some(Value::Number(n)) = fields.get("id") {
                // ? seed files may use numeric ids
                let id = n.to_string();
                fields.insert("id".to_string(), Value::String(id));
            }
        }
        self.rows.entry(collection).or_default().push(row);
    }
}

/// In-process record store. Backs the demo mode and the test suite.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedFile) -> Self {
        let mut inner = Inner::default();
        for row in seed.invitations {
            inner.push(Collection::Invitations, row);
        }
        for row in seed.sales_reps {
            inner.push(Collection::SalesReps, row);
        }
        for row in seed.cohorts {
            inner.push(Collection::Cohorts, row);
        }
        Self {
            inner: Mutex::new(inner),
        }
    }

    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let seed: SeedFile = serde_json::from_str(&raw)?;
        Ok(Self::from_seed(seed))
    }

    pub async fn seed(&self, collection: Collection, rows: Vec<Value>) {
        let mut inner = self.inner.lock().await;
        for row in rows {
            inner.push(collection, row);
        }
    }

    /// Make every later `op` on `collection` fail until [`MemoryStore::recover`].
    pub async fn fail(&self, collection: Collection, op: StoreOp) {
        self.inner.lock().await.failures.insert((collection, op));
    }

    pub async fn recover(&self, collection: Collection, op: StoreOp) {
        self.inner.lock().await.failures.remove(&(collection, op));
    }

    pub async fn calls(&self) -> Vec<StoreCall> {
        self.inner.lock().await.calls.clone()
    }

    pub async fn count_calls(&self, op: StoreOp) -> usize {
        self.inner
            .lock()
            .await
            .calls
            .iter()
            .filter(|call| call.op == op)
            .count()
    }

    pub async fn rows(&self, collection: Collection) -> Vec<Value> {
        self.inner
            .lock()
            .await
            .rows
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

// ! nulls sort after every value when ascending, before when descending
fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Greater,
        (_, None | Some(Value::Null)) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => match (x.as_str(), y.as_str()) {
            (Some(x), Some(y)) => x.cmp(y),
            _ => x.to_string().cmp(&y.to_string()),
        },
    }
}

fn same_id(row: &Value, id: &str) -> bool {
    row.get("id").and_then(Value::as_str) == Some(id)
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_all(&self, collection: Collection, order: OrderBy) -> Result<Vec<Value>> {
        let mut inner = self.inner.lock().await;
        inner.record(StoreOp::FetchAll, collection)?;

        let mut rows = inner.rows.get(&collection).cloned().unwrap_or_default();
        rows.sort_by(|a, b| {
            let ordering = compare_field(a, b, order.field);
            if order.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        Ok(rows)
    }

    async fn insert(&self, collection: Collection, record: Value) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.record(StoreOp::Insert, collection)?;

        let mut record = record;
        if let Value::Object(fields) = &mut record {
            fields.remove("id");
        } else {
            return Err(Error::StoreRejected(format!(
                "{} rows must be objects",
                collection.table()
            )));
        }
        inner.push(collection, record);
        Ok(())
    }

    async fn update_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.record(StoreOp::UpdateField, collection)?;

        let row = inner
            .rows
            .get_mut(&collection)
            .and_then(|rows| rows.iter_mut().find(|row| same_id(row, id)))
            .ok_or(Error::NotFound)?;
        if let Value::Object(fields) = row {
            fields.insert(field.to_string(), value);
        }
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.record(StoreOp::Delete, collection)?;

        let rows = inner.rows.entry(collection).or_default();
        let before = rows.len();
        rows.retain(|row| !same_id(row, id));
        if rows.len() == before {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
