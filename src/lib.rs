use axum::Router;

use crate::{routes::api_route::api_router, state::AppState};

pub mod connections;
pub mod consts;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod notifications;
pub mod routes;
pub mod state;
pub mod users;
pub mod utils;

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router(state.clone()))
        .with_state(state)
}
