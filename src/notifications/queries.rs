use surrealdb::{RecordId, Surreal, engine::any::Any};

use crate::consts::{
    db_const::NOTIFICATION_TABLE,
    notification_const::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
};
use crate::errors::Result;
use crate::models::notification::{Notification, NotificationWithUser};
use crate::users::queries::get_user;

pub async fn get_notifications(
    sdb: &Surreal<Any>,
    user_id: &RecordId,
    limit: Option<usize>,
) -> Result<Vec<NotificationWithUser>> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE) as i64;

    let notifications = sdb
        .query(
            "SELECT * FROM type::table($table) WHERE userId = $user \
             ORDER BY createdAt DESC, id ASC LIMIT $limit;",
        )
        .bind(("table", NOTIFICATION_TABLE))
        .bind(("user", user_id.clone()))
        .bind(("limit", limit))
        .await?
        .take::<Vec<Notification>>(0)?;

    enrich(sdb, notifications).await
}

pub async fn get_unread_notifications(
    sdb: &Surreal<Any>,
    user_id: &RecordId,
) -> Result<Vec<NotificationWithUser>> {
    let notifications = sdb
        .query(
            "SELECT * FROM type::table($table) WHERE userId = $user AND isRead = false \
             ORDER BY createdAt DESC, id ASC;",
        )
        .bind(("table", NOTIFICATION_TABLE))
        .bind(("user", user_id.clone()))
        .await?
        .take::<Vec<Notification>>(0)?;

    enrich(sdb, notifications).await
}

pub async fn get_starred_notifications(
    sdb: &Surreal<Any>,
    user_id: &RecordId,
) -> Result<Vec<NotificationWithUser>> {
    let notifications = sdb
        .query(
            "SELECT * FROM type::table($table) WHERE userId = $user AND isStarred = true \
             ORDER BY createdAt DESC, id ASC;",
        )
        .bind(("table", NOTIFICATION_TABLE))
        .bind(("user", user_id.clone()))
        .await?
        .take::<Vec<Notification>>(0)?;

    enrich(sdb, notifications).await
}

async fn enrich(
    sdb: &Surreal<Any>,
    notifications: Vec<Notification>,
) -> Result<Vec<NotificationWithUser>> {
    let mut enriched = Vec::with_capacity(notifications.len());
    for notification in notifications {
        let from_user = get_user(sdb, &notification.from_user_id)
            .await?
            .map(Into::into);
        enriched.push(NotificationWithUser {
            notification,
            from_user,
        });
    }

    Ok(enriched)
}
