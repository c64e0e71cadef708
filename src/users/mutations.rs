use surrealdb::{Surreal, engine::any::Any};

use crate::consts::db_const::USER_TABLE;
use crate::errors::{Error, Result};
use crate::models::user::{CreateUser, User, UserRole};
use crate::users::queries::get_user_by_auth_id;
use crate::utils::time::now_ms;

#[derive(Debug, Clone)]
pub struct UpsertProfile {
    pub auth_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
}

/// Create or refresh the profile for an identity-provider subject. The
/// identity provider is the source of truth, so an existing profile is
/// overwritten rather than merged.
pub async fn upsert_user(sdb: &Surreal<Any>, input: UpsertProfile) -> Result<User> {
    if let Some(existing) = get_user_by_auth_id(sdb, &input.auth_id).await? {
        let updated = sdb
            .query(
                "UPDATE $id SET name = $name, email = $email, role = $role, bio = $bio, \
                 skills = $skills, location = $location, avatarUrl = $avatar_url RETURN AFTER;",
            )
            .bind(("id", existing.id))
            .bind(("name", input.name))
            .bind(("email", input.email))
            .bind(("role", input.role))
            .bind(("bio", input.bio))
            .bind(("skills", input.skills))
            .bind(("location", input.location))
            .bind(("avatar_url", input.avatar_url))
            .await?
            .take::<Vec<User>>(0)?
            .into_iter()
            .next()
            .ok_or(Error::InternalServerError)?;

        return Ok(updated);
    }

    let user_data = CreateUser {
        auth_id: input.auth_id,
        name: input.name,
        email: input.email,
        role: input.role,
        bio: input.bio,
        skills: input.skills,
        location: input.location,
        avatar_url: input.avatar_url,
        created_at: now_ms(),
    };

    sdb.create::<Option<User>>(USER_TABLE)
        .content(user_data)
        .await?
        .ok_or(Error::InternalServerError)
}
