use surrealdb::{RecordId, Surreal, engine::any::Any};

use crate::consts::db_const::USER_TABLE;
use crate::errors::Result;
use crate::models::user::User;

pub async fn get_user(sdb: &Surreal<Any>, user_id: &RecordId) -> Result<Option<User>> {
    if user_id.table() != USER_TABLE {
        return Ok(None);
    }

    let user = sdb
        .query("SELECT * FROM $id;")
        .bind(("id", user_id.clone()))
        .await?
        .take::<Vec<User>>(0)?
        .into_iter()
        .next();

    Ok(user)
}

pub async fn get_user_by_auth_id(sdb: &Surreal<Any>, auth_id: &str) -> Result<Option<User>> {
    let user = sdb
        .query("SELECT * FROM type::table($table) WHERE authId = $auth_id;")
        .bind(("table", USER_TABLE))
        .bind(("auth_id", auth_id.to_string()))
        .await?
        .take::<Vec<User>>(0)?
        .into_iter()
        .next();

    Ok(user)
}

pub async fn user_exists(sdb: &Surreal<Any>, user_id: &RecordId) -> Result<bool> {
    Ok(get_user(sdb, user_id).await?.is_some())
}
