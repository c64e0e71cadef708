use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    errors::{Error, Result},
    middleware::AuthId,
    models::user::{User, UserRole},
    routes::api_route::current_user,
    state::AppState,
    users::{mutations, mutations::UpsertProfile, queries},
    utils::{
        get_record_id::get_record_id_from_string, validated_form::ValidatedJson,
        validator::validate_display_name,
    },
};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct SyncProfileRequest {
    #[validate(custom(function = validate_display_name))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: UserRole,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
}

/// Create or refresh the caller's profile from the identity provider's
/// claims. The upstream webhook transport is out of scope; this endpoint is
/// its in-process equivalent.
pub async fn sync_profile(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
    ValidatedJson(input): ValidatedJson<SyncProfileRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = mutations::upsert_user(
        &state.sdb,
        UpsertProfile {
            auth_id,
            name: input.name,
            email: input.email,
            role: input.role,
            bio: input.bio,
            skills: input.skills,
            location: input.location,
            avatar_url: input.avatar_url,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_me(
    State(state): State<AppState>,
    Extension(AuthId(auth_id)): Extension<AuthId>,
) -> Result<Json<User>> {
    let caller = current_user(&state, &auth_id).await?;

    Ok(Json(caller))
}

pub async fn get_user(
    State(state): State<AppState>,
    Extension(AuthId(_auth_id)): Extension<AuthId>,
    Path(user_id): Path<String>,
) -> Result<Json<User>> {
    let user_id = get_record_id_from_string(&user_id)?;
    let user = queries::get_user(&state.sdb, &user_id)
        .await?
        .ok_or(Error::UserNotFound)?;

    Ok(Json(user))
}
