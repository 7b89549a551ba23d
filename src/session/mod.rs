use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::{
    models::{
        Collections,
        invitation::{CreateInvitation, Invitation, InvitationStatus},
    },
    report::{
        Overview,
        filter::course_options,
        leaderboard::{Leaderboard, LeaderboardKind, leaderboard},
        overview,
    },
    session::{
        draft::{InvitationDraft, validation_message},
        ui::{Action, UiState, reduce},
    },
    store::tables::Tables,
    utils::time::time_now,
};

pub mod draft;
pub mod ui;

/// The one browser-facing session. Actions are serialized through the lock.
pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub collections: Collections,
    pub ui: UiState,
    // ! bumped by every started load; older results are dropped
    load_generation: u64,
}

impl Session {
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        let ui = std::mem::take(&mut self.ui);
        self.ui = reduce(ui, action);
    }

    pub fn apply_load(&mut self, collections: Collections) {
        info!(
            "loaded {} invitations, {} sales reps, {} cohorts",
            collections.invitations.len(),
            collections.sales_reps.len(),
            collections.cohorts.len()
        );
        self.collections = collections;
        self.dispatch(Action::LoadFinished);
    }

    /// Store the posted form. A changed cohort date goes through cohort
    /// selection so course and region pick up the cohort's values.
    pub fn edit_draft(&mut self, draft: InvitationDraft) {
        let picked_cohort = draft.cohort_date != self.ui.draft.cohort_date;
        let date = draft.cohort_date.clone();
        self.dispatch(Action::EditDraft(draft));

        if picked_cohort {
            let cohort = self
                .collections
                .cohorts
                .iter()
                .find(|c| c.date == date)
                .cloned();
            self.dispatch(Action::SelectCohort { date, cohort });
        }
    }

    /// Validate the current draft. A rejected draft never reaches the store.
    pub fn prepare_submit(&mut self) -> Option<CreateInvitation> {
        if let Err(errors) = self.ui.draft.validate() {
            self.dispatch(Action::SubmitRejected(validation_message(&errors)));
            return None;
        }
        Some(self.ui.draft.clone().into_create(time_now()))
    }

    pub fn start_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.dispatch(Action::LoadStarted);
        self.load_generation
    }

    /// Apply a finished load unless a newer one was started after it.
    pub fn finish_load(&mut self, generation: u64, collections: Collections) -> bool {
        if generation < self.load_generation {
            debug!(
                "dropping load {} superseded by {}",
                generation, self.load_generation
            );
            return false;
        }
        self.apply_load(collections);
        true
    }

    /// Local copy is patched only once the store accepted the change.
    pub async fn change_status(&mut self, tables: &Tables, id: &str, status: InvitationStatus) {
        match tables.update_invitation_status(id, status).await {
            Ok(()) => {
                if let Some(invitation) = self
                    .collections
                    .invitations
                    .iter_mut()
                    .find(|inv| inv.id == id)
                {
                    invitation.status = status;
                }
            }
            Err(e) => warn!("status update for {} failed: {}", id, e),
        }
    }

    /// Deletes only the invitation the user was asked to confirm.
    pub async fn confirm_delete(&mut self, tables: &Tables, id: &str) {
        if self.ui.pending_delete.as_deref() != Some(id) {
            warn!("delete of {} without confirmation ignored", id);
            return;
        }

        match tables.delete_invitation(id).await {
            Ok(()) => self.collections.invitations.retain(|inv| inv.id != id),
            Err(e) => warn!("delete of {} failed: {}", id, e),
        }
        self.dispatch(Action::DeleteFinished);
    }

    pub fn overview(&self, today: &str) -> Overview {
        overview(&self.collections, today)
    }

    pub fn leaderboards(&self) -> Vec<Leaderboard> {
        LeaderboardKind::ALL
            .into_iter()
            .map(|kind| {
                leaderboard(
                    kind,
                    self.ui.sorts.get(kind),
                    &self.collections.sales_reps,
                    &self.collections.invitations,
                )
            })
            .collect()
    }

    pub fn filtered_invitations(&self) -> Vec<&Invitation> {
        self.ui.filters.apply(&self.collections.invitations)
    }

    pub fn courses(&self) -> Vec<String> {
        course_options(&self.collections.cohorts)
    }

    pub fn pending_delete(&self) -> Option<&Invitation> {
        let id = self.ui.pending_delete.as_deref()?;
        self.collections.invitations.iter().find(|inv| inv.id == id)
    }
}

/// Full re-fetch. The store is queried without holding the session lock.
pub async fn refresh(session: &SharedSession, tables: &Tables) {
    let generation = session.lock().await.start_load();
    let fresh = tables.load_all().await;
    session.lock().await.finish_load(generation, fresh);
}

/// Insert the current draft, then re-fetch everything. The lock is only
/// held to read the draft and to record the outcome.
pub async fn submit_draft(session: &SharedSession, tables: &Tables) {
    let prepared = session.lock().await.prepare_submit();
    let Some(create) = prepared else {
        return;
    };

    match tables.insert_invitation(&create).await {
        Ok(()) => {
            info!("added invitation for {} ({})", create.name, create.company);
            session.lock().await.dispatch(Action::SubmitSucceeded);
            refresh(session, tables).await;
        }
        Err(e) => {
            warn!("insert rejected: {}", e);
            session
                .lock()
                .await
                .dispatch(Action::SubmitFailed(e.to_string()));
        }
    }
}
