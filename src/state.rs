use surrealdb::{
    Surreal,
    engine::any::{self, Any},
    opt::auth::Root,
};

use crate::errors::Result;

/// Startup schema: the pair index is what enforces the at-most-one-edge
/// invariant between any two users, the rest are lookup indexes.
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS users SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS connections SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS notifications SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS users_auth_idx ON TABLE users FIELDS authId UNIQUE;
    DEFINE INDEX IF NOT EXISTS connections_pair_idx ON TABLE connections FIELDS pairKey UNIQUE;
    DEFINE INDEX IF NOT EXISTS connections_requester_idx ON TABLE connections FIELDS requesterId;
    DEFINE INDEX IF NOT EXISTS connections_receiver_idx ON TABLE connections FIELDS receiverId;
    DEFINE INDEX IF NOT EXISTS notifications_user_idx ON TABLE notifications FIELDS userId;
";

#[derive(Debug, Clone)]
pub struct AppState {
    pub sdb: Surreal<Any>,
}

impl AppState {
    pub async fn init() -> Result<Self> {
        let url = env_or("SURREAL_URL", "ws://localhost:8050");
        Self::connect(&url).await
    }

    /// Connect to any SurrealDB endpoint. Tests pass `mem://` to run
    /// against the embedded engine, which needs no credentials.
    pub async fn connect(url: &str) -> Result<Self> {
        let sdb = any::connect(url).await?;

        if !url.starts_with("mem:") {
            let username = env_or("SURREAL_USER", "root");
            let password = env_or("SURREAL_PASS", "secret");
            sdb.signin(Root {
                username: &username,
                password: &password,
            })
            .await?;
        }

        let ns = env_or("SURREAL_NS", "nextstep");
        let db = env_or("SURREAL_DB", "nextstep");
        sdb.use_ns(ns).use_db(db).await?;

        sdb.query(SCHEMA).await?.check()?;

        Ok(Self { sdb })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
