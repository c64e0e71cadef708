use nextstep_api::models::user::{User, UserRole};
use nextstep_api::state::AppState;
use nextstep_api::users::mutations::{UpsertProfile, upsert_user};

/// Fresh embedded database per test.
pub async fn mem_state() -> AppState {
    AppState::connect("mem://").await.expect("in-memory db")
}

pub async fn seed_user(state: &AppState, auth_id: &str, name: &str, role: UserRole) -> User {
    upsert_user(
        &state.sdb,
        UpsertProfile {
            auth_id: auth_id.to_string(),
            name: name.to_string(),
            email: format!("{auth_id}@example.com"),
            role,
            bio: None,
            skills: None,
            location: None,
            avatar_url: None,
        },
    )
    .await
    .expect("seed user")
}
