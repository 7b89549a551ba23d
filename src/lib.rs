use axum::Router;

use crate::{routes::tracker_router, state::AppState};

pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod report;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod utils;
pub mod views;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(tracker_router(state.clone()))
        .with_state(state)
}
