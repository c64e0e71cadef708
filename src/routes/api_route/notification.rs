use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde_json::{Value, json};

use crate::{
    errors::Result,
    middleware::AuthId,
    models::notification::NotificationWithUser,
    notifications::{mutations, queries},
    routes::api_route::current_user,
    state::AppState,
    utils::get_record_id::get_record_id_from_string,
};

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ListParams {
    pub limit: Option<usize>,
}

pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<NotificationWithUser>>> {
    let caller = current_user(&state, &auth_id).await?;
    let notifications = queries::get_notifications(&state.sdb, &caller.id, params.limit).await?;

    Ok(Json(notifications))
}

pub async fn unread_notifications(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Vec<NotificationWithUser>>> {
    let caller = current_user(&state, &auth_id).await?;
    let notifications = queries::get_unread_notifications(&state.sdb, &caller.id).await?;

    Ok(Json(notifications))
}

pub async fn starred_notifications(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Vec<NotificationWithUser>>> {
    let caller = current_user(&state, &auth_id).await?;
    let notifications = queries::get_starred_notifications(&state.sdb, &caller.id).await?;

    Ok(Json(notifications))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(notification_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let notification_id = get_record_id_from_string(&notification_id)?;

    mutations::mark_as_read(&state.sdb, &notification_id, &caller.id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn mark_unread(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(notification_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let notification_id = get_record_id_from_string(&notification_id)?;

    mutations::mark_as_unread(&state.sdb, &notification_id, &caller.id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn toggle_star(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(notification_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let notification_id = get_record_id_from_string(&notification_id)?;

    let is_starred = mutations::toggle_star(&state.sdb, &notification_id, &caller.id).await?;

    Ok(Json(json!({ "success": true, "isStarred": is_starred })))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(notification_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let notification_id = get_record_id_from_string(&notification_id)?;

    mutations::delete_notification(&state.sdb, &notification_id, &caller.id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let count = mutations::mark_all_as_read(&state.sdb, &caller.id).await?;

    Ok(Json(json!({ "success": true, "count": count })))
}

pub async fn delete_all(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let count = mutations::delete_all_notifications(&state.sdb, &caller.id).await?;

    Ok(Json(json!({ "success": true, "count": count })))
}
