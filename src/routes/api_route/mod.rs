use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::{
    errors::{Error, Result},
    middleware::auth_jwt_middleware,
    models::user::User,
    state::AppState,
    users,
};

pub mod connection;
pub mod notification;
pub mod user;

pub fn api_router(config: AppState) -> Router<AppState> {
    Router::new()
        .nest("/connections", connection_routes(config.clone()))
        .nest("/notifications", notification_routes(config.clone()))
        .nest("/users", user_routes(config.clone()))
        .with_state(config)
}

fn connection_routes(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(connection::send_request))
        .route("/", get(connection::list_connections))
        .route("/requests/inbound", get(connection::inbound_requests))
        .route("/requests/outbound", get(connection::outbound_requests))
        .route(
            "/requests/pending-count",
            get(connection::pending_request_count),
        )
        .route("/status/{user_id}", get(connection::connection_status))
        .route("/{connection_id}/accept", post(connection::accept_request))
        .route("/{connection_id}/reject", post(connection::reject_request))
        .route("/{connection_id}/cancel", post(connection::cancel_request))
        .route(
            "/{connection_id}/remove",
            post(connection::remove_connection),
        )
        .layer(middleware::from_fn(auth_jwt_middleware))
        .with_state(config)
}

fn notification_routes(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list_notifications))
        .route("/", delete(notification::delete_all))
        .route("/unread", get(notification::unread_notifications))
        .route("/starred", get(notification::starred_notifications))
        .route("/read-all", post(notification::mark_all_read))
        .route("/{notification_id}/read", post(notification::mark_read))
        .route("/{notification_id}/unread", post(notification::mark_unread))
        .route("/{notification_id}/star", post(notification::toggle_star))
        .route(
            "/{notification_id}",
            delete(notification::delete_notification),
        )
        .layer(middleware::from_fn(auth_jwt_middleware))
        .with_state(config)
}

fn user_routes(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(user::sync_profile))
        .route("/me", get(user::get_me))
        .route("/{user_id}", get(user::get_user))
        .layer(middleware::from_fn(auth_jwt_middleware))
        .with_state(config)
}

/// Resolve the authenticated identity to its profile. Fails with 404 when
/// the identity has no synced profile yet.
pub(crate) async fn current_user(state: &AppState, auth_id: &str) -> Result<User> {
    users::queries::get_user_by_auth_id(&state.sdb, auth_id)
        .await?
        .ok_or(Error::UserNotFound)
}
