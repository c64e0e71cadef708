use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    connections::{mutations, queries},
    errors::Result,
    middleware::AuthId,
    models::connection::{
        ConnectionStanding, ConnectionWithUser, InboundRequest, OutboundRequest, SendRequestOutcome,
    },
    routes::api_route::current_user,
    state::AppState,
    utils::{get_record_id::get_record_id_from_string, validated_form::ValidatedJson},
};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendConnectionRequest {
    pub receiver_id: String,
    #[validate(length(max = 500))]
    pub message: Option<String>,
}

pub async fn send_request(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    ValidatedJson(input): ValidatedJson<SendConnectionRequest>,
) -> Result<(StatusCode, Json<SendRequestOutcome>)> {
    let caller = current_user(&state, &auth_id).await?;
    let receiver_id = get_record_id_from_string(&input.receiver_id)?;

    let outcome =
        mutations::send_connection_request(&state.sdb, caller.id, receiver_id, input.message)
            .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn accept_request(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(connection_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let connection_id = get_record_id_from_string(&connection_id)?;

    mutations::accept_connection_request(&state.sdb, connection_id, caller.id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn reject_request(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(connection_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let connection_id = get_record_id_from_string(&connection_id)?;

    mutations::reject_connection_request(&state.sdb, connection_id, caller.id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn cancel_request(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(connection_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let connection_id = get_record_id_from_string(&connection_id)?;

    mutations::cancel_connection_request(&state.sdb, connection_id, caller.id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn remove_connection(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(connection_id): Path<String>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let connection_id = get_record_id_from_string(&connection_id)?;

    mutations::remove_connection(&state.sdb, connection_id, caller.id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn list_connections(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Vec<ConnectionWithUser>>> {
    let caller = current_user(&state, &auth_id).await?;
    let connections = queries::get_connections(&state.sdb, &caller.id).await?;

    Ok(Json(connections))
}

pub async fn inbound_requests(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Vec<InboundRequest>>> {
    let caller = current_user(&state, &auth_id).await?;
    let requests = queries::get_inbound_requests(&state.sdb, &caller.id).await?;

    Ok(Json(requests))
}

pub async fn outbound_requests(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Vec<OutboundRequest>>> {
    let caller = current_user(&state, &auth_id).await?;
    let requests = queries::get_outbound_requests(&state.sdb, &caller.id).await?;

    Ok(Json(requests))
}

pub async fn pending_request_count(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<Value>> {
    let caller = current_user(&state, &auth_id).await?;
    let count = queries::get_pending_request_count(&state.sdb, &caller.id).await?;

    Ok(Json(json!({ "count": count })))
}

pub async fn connection_status(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    Path(user_id): Path<String>,
) -> Result<Json<ConnectionStanding>> {
    let caller = current_user(&state, &auth_id).await?;
    let other_user_id = get_record_id_from_string(&user_id)?;

    let standing =
        queries::get_connection_status(&state.sdb, &caller.id, &other_user_id).await?;

    Ok(Json(standing))
}
