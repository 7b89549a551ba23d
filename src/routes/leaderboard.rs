use axum::{
    extract::{Form, Path, State, rejection::FormRejection},
    response::Redirect,
};

use crate::{
    errors::Result,
    report::leaderboard::{LeaderboardKind, LeaderboardSort},
    session::ui::{Action, Tab},
    state::AppState,
};

pub async fn sort_leaderboard(
    State(state): State<AppState>,
    Path(board): Path<String>,
    input: std::result::Result<Form<LeaderboardSort>, FormRejection>,
) -> Result<Redirect> {
    let kind: LeaderboardKind = board.parse()?;
    let Form(sort) = input?;

    let mut session = state.session.lock().await;
    session.dispatch(Action::SortLeaderboard(kind, sort));
    Ok(Redirect::to(Tab::Leaderboards.path()))
}
