use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::models::user::UserSummary;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A connection edge between two users. Created directed (requester ->
/// receiver) but bidirectional in meaning once accepted. `pair_key` is the
/// ordered `"min|max"` rendering of the two participant ids; a unique index
/// on it keeps a pair down to a single edge.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: RecordId,
    pub requester_id: RecordId,
    pub receiver_id: RecordId,
    pub status: ConnectionStatus,
    pub message: Option<String>, // ! & (len = 500)
    pub pair_key: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnection {
    pub requester_id: RecordId,
    pub receiver_id: RecordId,
    pub status: ConnectionStatus,
    pub message: Option<String>,
    pub pair_key: String,
    pub created_at: i64,
}

pub fn pair_key(a: &RecordId, b: &RecordId) -> String {
    let a = a.to_string();
    let b = b.to_string();
    if a <= b {
        format!("{a}|{b}")
    } else {
        format!("{b}|{a}")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendRequestOutcome {
    pub connection_id: RecordId,
    pub auto_accepted: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PairStatus {
    None,
    Pending,
    Accepted,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outbound,
    Inbound,
}

/// Result of a status lookup, always relative to the first user of the
/// queried pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStanding {
    pub status: PairStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<RecordId>,
}

impl ConnectionStanding {
    pub fn none() -> Self {
        Self {
            status: PairStatus::None,
            direction: None,
            connection_id: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionWithUser {
    #[serde(flatten)]
    pub connection: Connection,
    pub connected_user: Option<UserSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    #[serde(flatten)]
    pub connection: Connection,
    pub requester_user: Option<UserSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OutboundRequest {
    #[serde(flatten)]
    pub connection: Connection,
    pub receiver_user: Option<UserSummary>,
}
