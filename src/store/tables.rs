use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{
    errors::Result,
    models::{
        Collections,
        cohort::Cohort,
        invitation::{CreateInvitation, Invitation, InvitationStatus},
        sales_rep::SalesRep,
    },
    store::{Collection, OrderBy, RecordStore},
};

const INVITATION_ORDER: OrderBy = OrderBy::desc("created_at");
const SALES_REP_ORDER: OrderBy = OrderBy::asc("name");
const COHORT_ORDER: OrderBy = OrderBy::asc("date");

/// Typed view over a [`RecordStore`].
#[derive(Clone)]
pub struct Tables {
    store: Arc<dyn RecordStore>,
}

impl Tables {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        collection: Collection,
        order: OrderBy,
    ) -> Result<Vec<T>> {
        let rows = self.store.fetch_all(collection, order).await?;
        let records = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<core::result::Result<Vec<T>, _>>()?;
        Ok(records)
    }

    pub async fn invitations(&self) -> Result<Vec<Invitation>> {
        self.fetch(Collection::Invitations, INVITATION_ORDER).await
    }

    pub async fn sales_reps(&self) -> Result<Vec<SalesRep>> {
        self.fetch(Collection::SalesReps, SALES_REP_ORDER).await
    }

    pub async fn cohorts(&self) -> Result<Vec<Cohort>> {
        self.fetch(Collection::Cohorts, COHORT_ORDER).await
    }

    /// Fetch all three collections concurrently. A collection that fails to
    /// load comes back empty; the others are kept.
    pub async fn load_all(&self) -> Collections {
        let (invitations, sales_reps, cohorts) =
            tokio::join!(self.invitations(), self.sales_reps(), self.cohorts());

        Collections {
            invitations: or_empty(Collection::Invitations, invitations),
            sales_reps: or_empty(Collection::SalesReps, sales_reps),
            cohorts: or_empty(Collection::Cohorts, cohorts),
        }
    }

    pub async fn insert_invitation(&self, invitation: &CreateInvitation) -> Result<()> {
        let row = serde_json::to_value(invitation)?;
        self.store.insert(Collection::Invitations, row).await
    }

    pub async fn update_invitation_status(&self, id: &str, status: InvitationStatus) -> Result<()> {
        let value = serde_json::to_value(status)?;
        self.store
            .update_field(Collection::Invitations, id, "status", value)
            .await
    }

    pub async fn delete_invitation(&self, id: &str) -> Result<()> {
        self.store.delete(Collection::Invitations, id).await
    }
}

fn or_empty<T>(collection: Collection, fetched: Result<Vec<T>>) -> Vec<T> {
    match fetched {
        Ok(records) => records,
        Err(e) => {
            warn!("failed to load {}: {}", collection.table(), e);
            Vec::new()
        }
    }
}
