use async_trait::async_trait;
use serde_json::Value;

use crate::{
    consts::store_const::{COHORT_TABLE, INVITATION_TABLE, SALES_REP_TABLE},
    errors::Result,
};

pub mod memory;
pub mod surreal;
pub mod tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Invitations,
    SalesReps,
    Cohorts,
}

impl Collection {
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Invitations => INVITATION_TABLE,
            Collection::SalesReps => SALES_REP_TABLE,
            Collection::Cohorts => COHORT_TABLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: &'static str,
    pub descending: bool,
}

impl OrderBy {
    pub const fn asc(field: &'static str) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub const fn desc(field: &'static str) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

/// Remote record store. Every call is single shot: no retries, no paging.
///
/// Rows travel as JSON objects carrying a string `id`; typed access goes
/// through [`tables::Tables`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_all(&self, collection: Collection, order: OrderBy) -> Result<Vec<Value>>;

    async fn insert(&self, collection: Collection, record: Value) -> Result<()>;

    async fn update_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<()>;

    async fn delete(&self, collection: Collection, id: &str) -> Result<()>;
}
