use surrealdb::{RecordId, Surreal, engine::any::Any};

use crate::consts::db_const::NOTIFICATION_TABLE;
use crate::errors::{Error, Result};
use crate::models::notification::{CreateNotification, NewNotification, Notification};
use crate::utils::time::now_ms;

/// Append a notification. Called by the connection graph on fan-out; never
/// exposed over HTTP directly.
pub async fn create_notification(
    sdb: &Surreal<Any>,
    input: NewNotification,
) -> Result<Notification> {
    let notification_data = CreateNotification {
        user_id: input.user_id,
        from_user_id: input.from_user_id,
        kind: input.kind,
        title: input.title,
        body: input.body,
        related_connection_id: input.related_connection_id,
        is_read: false,
        is_starred: false,
        created_at: now_ms(),
    };

    sdb.create::<Option<Notification>>(NOTIFICATION_TABLE)
        .content(notification_data)
        .await?
        .ok_or(Error::InternalServerError)
}

/// Fetch a notification and check the caller owns it. Every recipient-facing
/// mutation goes through this.
async fn find_owned(
    sdb: &Surreal<Any>,
    notification_id: &RecordId,
    caller_id: &RecordId,
) -> Result<Notification> {
    if notification_id.table() != NOTIFICATION_TABLE {
        return Err(Error::NotificationNotFound);
    }

    let notification = sdb
        .query("SELECT * FROM $id;")
        .bind(("id", notification_id.clone()))
        .await?
        .take::<Vec<Notification>>(0)?
        .into_iter()
        .next()
        .ok_or(Error::NotificationNotFound)?;

    if notification.user_id != *caller_id {
        return Err(Error::Forbidden);
    }

    Ok(notification)
}

pub async fn mark_as_read(
    sdb: &Surreal<Any>,
    notification_id: &RecordId,
    caller_id: &RecordId,
) -> Result<()> {
    let notification = find_owned(sdb, notification_id, caller_id).await?;

    sdb.query("UPDATE $id SET isRead = true, readAt = $now;")
        .bind(("id", notification.id))
        .bind(("now", now_ms()))
        .await?
        .check()?;

    Ok(())
}

pub async fn mark_as_unread(
    sdb: &Surreal<Any>,
    notification_id: &RecordId,
    caller_id: &RecordId,
) -> Result<()> {
    let notification = find_owned(sdb, notification_id, caller_id).await?;

    sdb.query("UPDATE $id SET isRead = false, readAt = NONE;")
        .bind(("id", notification.id))
        .await?
        .check()?;

    Ok(())
}

/// Flip the starred flag, returning the new value.
pub async fn toggle_star(
    sdb: &Surreal<Any>,
    notification_id: &RecordId,
    caller_id: &RecordId,
) -> Result<bool> {
    let notification = find_owned(sdb, notification_id, caller_id).await?;
    let starred = !notification.is_starred;

    sdb.query("UPDATE $id SET isStarred = $starred;")
        .bind(("id", notification.id))
        .bind(("starred", starred))
        .await?
        .check()?;

    Ok(starred)
}

pub async fn delete_notification(
    sdb: &Surreal<Any>,
    notification_id: &RecordId,
    caller_id: &RecordId,
) -> Result<()> {
    let notification = find_owned(sdb, notification_id, caller_id).await?;

    sdb.query("DELETE $id;")
        .bind(("id", notification.id))
        .await?
        .check()?;

    Ok(())
}

/// Mark every unread notification of the caller as read; returns how many
/// were touched.
pub async fn mark_all_as_read(sdb: &Surreal<Any>, caller_id: &RecordId) -> Result<usize> {
    let updated = sdb
        .query(
            "UPDATE type::table($table) SET isRead = true, readAt = $now \
             WHERE userId = $user AND isRead = false RETURN AFTER;",
        )
        .bind(("table", NOTIFICATION_TABLE))
        .bind(("user", caller_id.clone()))
        .bind(("now", now_ms()))
        .await?
        .take::<Vec<Notification>>(0)?;

    Ok(updated.len())
}

pub async fn delete_all_notifications(sdb: &Surreal<Any>, caller_id: &RecordId) -> Result<usize> {
    let deleted = sdb
        .query("DELETE type::table($table) WHERE userId = $user RETURN BEFORE;")
        .bind(("table", NOTIFICATION_TABLE))
        .bind(("user", caller_id.clone()))
        .await?
        .take::<Vec<Notification>>(0)?;

    Ok(deleted.len())
}
