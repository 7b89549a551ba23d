use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tracing::info;

use crate::{
    routes::back_to_tab,
    session::ui::{Action, Tab},
    state::AppState,
    utils::time::today,
    views,
};

async fn show_tab(state: &AppState, tab: Tab) -> Html<String> {
    let mut session = state.session.lock().await;
    session.dispatch(Action::SelectTab(tab));
    Html(views::render(&session, &today()))
}

pub async fn current_page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(views::render(&session, &today()))
}

pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    show_tab(&state, Tab::Dashboard).await
}

pub async fn invitations_page(State(state): State<AppState>) -> Html<String> {
    show_tab(&state, Tab::Invitations).await
}

pub async fn leaderboards_page(State(state): State<AppState>) -> Html<String> {
    show_tab(&state, Tab::Leaderboards).await
}

pub async fn refresh_all(State(state): State<AppState>) -> Redirect {
    info!("manual refresh requested");
    state.refresh().await;
    let session = state.session.lock().await;
    back_to_tab(&session)
}

pub async fn dismiss_notice(State(state): State<AppState>) -> Redirect {
    let mut session = state.session.lock().await;
    session.dispatch(Action::DismissNotice);
    back_to_tab(&session)
}

pub async fn health() -> &'static str {
    "ok"
}
