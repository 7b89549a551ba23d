use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    models::invitation::Invitation,
    report::{Overview, filter::InvitationFilter, leaderboard::Leaderboard},
    state::AppState,
    utils::time::today,
};

#[derive(Debug, Clone, Serialize)]
pub struct InvitationList {
    pub filters: InvitationFilter,
    pub invitations: Vec<Invitation>,
    pub shown: usize,
    pub total: usize,
}

pub async fn overview_json(State(state): State<AppState>) -> Json<Overview> {
    let session = state.session.lock().await;
    Json(session.overview(&today()))
}

pub async fn leaderboards_json(State(state): State<AppState>) -> Json<Vec<Leaderboard>> {
    let session = state.session.lock().await;
    Json(session.leaderboards())
}

/// The invitations table as currently filtered.
pub async fn invitations_json(State(state): State<AppState>) -> Json<InvitationList> {
    let session = state.session.lock().await;
    let invitations: Vec<Invitation> = session
        .filtered_invitations()
        .into_iter()
        .cloned()
        .collect();

    Json(InvitationList {
        filters: session.ui.filters.clone(),
        shown: invitations.len(),
        total: session.collections.invitations.len(),
        invitations,
    })
}
