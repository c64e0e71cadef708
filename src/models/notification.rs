use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::models::user::UserSummary;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Message,
    ConnectionRequest,
    ConnectionAccepted,
    ConnectionRemoved,
}

/// Append-only notification record. Written once as a side effect of a
/// connection transition; the read/star flags afterwards belong to the
/// recipient alone.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    pub user_id: RecordId,
    pub from_user_id: RecordId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub body: Option<String>,
    pub related_connection_id: Option<RecordId>,
    pub is_read: bool,
    pub is_starred: bool,
    pub created_at: i64,
    pub read_at: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub user_id: RecordId,
    pub from_user_id: RecordId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub body: Option<String>,
    pub related_connection_id: Option<RecordId>,
    pub is_read: bool,
    pub is_starred: bool,
    pub created_at: i64,
}

/// What the connection graph hands to the sink; the sink fills in the
/// bookkeeping fields.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: RecordId,
    pub from_user_id: RecordId,
    pub kind: NotificationType,
    pub title: String,
    pub body: Option<String>,
    pub related_connection_id: Option<RecordId>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationWithUser {
    #[serde(flatten)]
    pub notification: Notification,
    pub from_user: Option<UserSummary>,
}
