use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    routes::{
        api::{invitations_json, leaderboards_json, overview_json},
        invitation::{
            cancel_delete, cancel_form, clear_filters, confirm_delete, edit_draft, open_form,
            request_delete, set_filters, submit_invitation, update_status,
        },
        leaderboard::sort_leaderboard,
        pages::{
            current_page, dashboard_page, dismiss_notice, health, invitations_page,
            leaderboards_page, refresh_all,
        },
    },
    session::Session,
    state::AppState,
};

pub mod api;
pub mod invitation;
pub mod leaderboard;
pub mod pages;

pub fn tracker_router(config: AppState) -> Router<AppState> {
    Router::new()
        .merge(pages(config.clone()))
        .merge(invitations(config.clone()))
        .route("/leaderboards/{board}/sort", post(sort_leaderboard))
        .merge(api(config.clone()))
        .with_state(config)
}

fn pages(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(current_page))
        .route("/dashboard", get(dashboard_page))
        .route("/leaderboards", get(leaderboards_page))
        .route("/refresh", post(refresh_all))
        .route("/notice/dismiss", post(dismiss_notice))
        .route("/health", get(health))
        .with_state(config)
}

fn invitations(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/invitations", get(invitations_page).post(submit_invitation))
        .route("/invitations/filters", post(set_filters))
        .route("/invitations/filters/clear", post(clear_filters))
        .route("/invitations/form", post(edit_draft))
        .route("/invitations/form/open", post(open_form))
        .route("/invitations/form/cancel", post(cancel_form))
        .route("/invitations/delete/cancel", post(cancel_delete))
        .route("/invitations/{id}/status", post(update_status))
        .route(
            "/invitations/{id}/delete",
            get(request_delete).post(confirm_delete),
        )
        .with_state(config)
}

fn api(config: AppState) -> Router<AppState> {
    // * read-only JSON of the same aggregates the pages render
    Router::new()
        .route("/api/overview", get(overview_json))
        .route("/api/leaderboards", get(leaderboards_json))
        .route("/api/invitations", get(invitations_json))
        .with_state(config)
}

/// Post/redirect/get back to whichever tab the session is on.
pub fn back_to_tab(session: &Session) -> Redirect {
    Redirect::to(session.ui.tab.path())
}
