use surrealdb::{RecordId, Surreal, engine::any::Any};
use tracing::warn;

use crate::consts::{
    connection_const::{MAX_MESSAGE_CHARS, PAIR_INDEX},
    db_const::CONNECTION_TABLE,
};
use crate::errors::{Error, Result};
use crate::models::connection::{
    Connection, ConnectionStatus, CreateConnection, SendRequestOutcome, pair_key,
};
use crate::models::notification::{NewNotification, NotificationType};
use crate::notifications::mutations::create_notification;
use crate::users::queries::{get_user, user_exists};
use crate::utils::time::now_ms;

/// Send a connection request from `requester_id` to `receiver_id`.
///
/// If the receiver already has an outstanding request towards the caller,
/// that edge is accepted in place (`auto_accepted = true`) so a pair never
/// holds two pending edges. A prior rejected edge in either direction is
/// superseded.
pub async fn send_connection_request(
    sdb: &Surreal<Any>,
    requester_id: RecordId,
    receiver_id: RecordId,
    message: Option<String>,
) -> Result<SendRequestOutcome> {
    if requester_id == receiver_id {
        return Err(Error::SelfConnection);
    }

    if let Some(msg) = &message {
        if msg.chars().count() > MAX_MESSAGE_CHARS {
            return Err(Error::MessageTooLong(MAX_MESSAGE_CHARS));
        }
    }

    let requester = get_user(sdb, &requester_id)
        .await?
        .ok_or(Error::UserNotFound)?;
    if !user_exists(sdb, &receiver_id).await? {
        return Err(Error::UserNotFound);
    }

    // Edge the caller already created towards the receiver.
    if let Some(edge) = edge_between(sdb, &requester_id, &receiver_id).await? {
        match edge.status {
            // Superseded by the new request.
            ConnectionStatus::Rejected => delete_edge(sdb, &edge.id).await?,
            ConnectionStatus::Pending => return Err(Error::RequestAlreadyPending),
            ConnectionStatus::Accepted => return Err(Error::AlreadyConnected),
        }
    }

    // Edge the receiver created towards the caller.
    if let Some(edge) = edge_between(sdb, &receiver_id, &requester_id).await? {
        match edge.status {
            ConnectionStatus::Rejected => delete_edge(sdb, &edge.id).await?,
            ConnectionStatus::Pending => {
                // They already reached out first: accept their edge instead
                // of creating a second one.
                let accepted = transition(sdb, &edge.id, ConnectionStatus::Accepted)
                    .await?
                    // The guard only fails if the edge was resolved under us.
                    .ok_or(Error::AlreadyConnected)?;

                notify_best_effort(
                    sdb,
                    NewNotification {
                        user_id: receiver_id,
                        from_user_id: requester_id,
                        kind: NotificationType::ConnectionAccepted,
                        title: format!("{} accepted your connection request", requester.name),
                        body: None,
                        related_connection_id: Some(accepted.id.clone()),
                    },
                )
                .await;

                return Ok(SendRequestOutcome {
                    connection_id: accepted.id,
                    auto_accepted: true,
                });
            }
            ConnectionStatus::Accepted => return Err(Error::AlreadyConnected),
        }
    }

    let connection_data = CreateConnection {
        requester_id: requester_id.clone(),
        receiver_id: receiver_id.clone(),
        status: ConnectionStatus::Pending,
        message: message.clone(),
        pair_key: pair_key(&requester_id, &receiver_id),
        created_at: now_ms(),
    };

    let created = sdb
        .create::<Option<Connection>>(CONNECTION_TABLE)
        .content(connection_data)
        .await
        .map_err(map_pair_conflict)?
        .ok_or(Error::InternalServerError)?;

    notify_best_effort(
        sdb,
        NewNotification {
            user_id: receiver_id,
            from_user_id: requester_id,
            kind: NotificationType::ConnectionRequest,
            title: format!("{} sent you a connection request", requester.name),
            body: message,
            related_connection_id: Some(created.id.clone()),
        },
    )
    .await;

    Ok(SendRequestOutcome {
        connection_id: created.id,
        auto_accepted: false,
    })
}

/// Accept a pending request. Only the invited party may accept.
pub async fn accept_connection_request(
    sdb: &Surreal<Any>,
    connection_id: RecordId,
    caller_id: RecordId,
) -> Result<()> {
    let caller = get_user(sdb, &caller_id)
        .await?
        .ok_or(Error::UserNotFound)?;
    let connection = find_connection(sdb, &connection_id)
        .await?
        .ok_or(Error::ConnectionNotFound)?;

    if connection.receiver_id != caller_id {
        return Err(Error::Forbidden);
    }
    if connection.status != ConnectionStatus::Pending {
        return Err(Error::InvalidState(
            "This request has already been responded to",
        ));
    }

    let accepted = transition(sdb, &connection.id, ConnectionStatus::Accepted)
        .await?
        .ok_or(Error::InvalidState(
            "This request has already been responded to",
        ))?;

    notify_best_effort(
        sdb,
        NewNotification {
            user_id: connection.requester_id,
            from_user_id: caller_id,
            kind: NotificationType::ConnectionAccepted,
            title: format!("{} accepted your connection request", caller.name),
            body: None,
            related_connection_id: Some(accepted.id),
        },
    )
    .await;

    Ok(())
}

/// Reject a pending request. A silent decline: the requester is not
/// notified.
pub async fn reject_connection_request(
    sdb: &Surreal<Any>,
    connection_id: RecordId,
    caller_id: RecordId,
) -> Result<()> {
    let connection = find_connection(sdb, &connection_id)
        .await?
        .ok_or(Error::ConnectionNotFound)?;

    if connection.receiver_id != caller_id {
        return Err(Error::Forbidden);
    }
    if connection.status != ConnectionStatus::Pending {
        return Err(Error::InvalidState(
            "This request has already been responded to",
        ));
    }

    transition(sdb, &connection.id, ConnectionStatus::Rejected)
        .await?
        .ok_or(Error::InvalidState(
            "This request has already been responded to",
        ))?;

    Ok(())
}

/// Withdraw an outbound request. The edge is deleted, not tombstoned.
pub async fn cancel_connection_request(
    sdb: &Surreal<Any>,
    connection_id: RecordId,
    caller_id: RecordId,
) -> Result<()> {
    let connection = find_connection(sdb, &connection_id)
        .await?
        .ok_or(Error::ConnectionNotFound)?;

    if connection.requester_id != caller_id {
        return Err(Error::Forbidden);
    }
    if connection.status != ConnectionStatus::Pending {
        return Err(Error::InvalidState("Can only cancel pending requests"));
    }

    delete_edge(sdb, &connection.id).await?;

    Ok(())
}

/// Dissolve an accepted connection from either side. The other participant
/// is notified.
pub async fn remove_connection(
    sdb: &Surreal<Any>,
    connection_id: RecordId,
    caller_id: RecordId,
) -> Result<()> {
    let caller = get_user(sdb, &caller_id)
        .await?
        .ok_or(Error::UserNotFound)?;
    let connection = find_connection(sdb, &connection_id)
        .await?
        .ok_or(Error::ConnectionNotFound)?;

    if connection.requester_id != caller_id && connection.receiver_id != caller_id {
        return Err(Error::Forbidden);
    }
    if connection.status != ConnectionStatus::Accepted {
        return Err(Error::InvalidState("Can only remove accepted connections"));
    }

    let other_user_id = if connection.requester_id == caller_id {
        connection.receiver_id.clone()
    } else {
        connection.requester_id.clone()
    };

    delete_edge(sdb, &connection.id).await?;

    notify_best_effort(
        sdb,
        NewNotification {
            user_id: other_user_id,
            from_user_id: caller_id,
            kind: NotificationType::ConnectionRemoved,
            title: format!("{} removed you from their connections", caller.name),
            body: None,
            related_connection_id: None,
        },
    )
    .await;

    Ok(())
}

pub(crate) async fn find_connection(
    sdb: &Surreal<Any>,
    connection_id: &RecordId,
) -> Result<Option<Connection>> {
    if connection_id.table() != CONNECTION_TABLE {
        return Ok(None);
    }

    let connection = sdb
        .query("SELECT * FROM $id;")
        .bind(("id", connection_id.clone()))
        .await?
        .take::<Vec<Connection>>(0)?
        .into_iter()
        .next();

    Ok(connection)
}

/// The edge created by `requester_id` towards `receiver_id`, if any. One
/// direction only; callers check both orientations themselves.
pub(crate) async fn edge_between(
    sdb: &Surreal<Any>,
    requester_id: &RecordId,
    receiver_id: &RecordId,
) -> Result<Option<Connection>> {
    let connection = sdb
        .query(
            "SELECT * FROM type::table($table) \
             WHERE requesterId = $requester AND receiverId = $receiver;",
        )
        .bind(("table", CONNECTION_TABLE))
        .bind(("requester", requester_id.clone()))
        .bind(("receiver", receiver_id.clone()))
        .await?
        .take::<Vec<Connection>>(0)?
        .into_iter()
        .next();

    Ok(connection)
}

async fn delete_edge(sdb: &Surreal<Any>, connection_id: &RecordId) -> Result<()> {
    sdb.query("DELETE $id;")
        .bind(("id", connection_id.clone()))
        .await?
        .check()?;

    Ok(())
}

/// Move a pending edge to `status`. Guarded on the current status so a
/// concurrently resolved edge is not transitioned twice; returns `None`
/// when the guard does not match.
async fn transition(
    sdb: &Surreal<Any>,
    connection_id: &RecordId,
    status: ConnectionStatus,
) -> Result<Option<Connection>> {
    let updated = sdb
        .query(
            "UPDATE $id SET status = $status, updatedAt = $now \
             WHERE status = $pending RETURN AFTER;",
        )
        .bind(("id", connection_id.clone()))
        .bind(("status", status))
        .bind(("now", now_ms()))
        .bind(("pending", ConnectionStatus::Pending))
        .await?
        .take::<Vec<Connection>>(0)?
        .into_iter()
        .next();

    Ok(updated)
}

/// Losing the unique pair-index race means another request between the two
/// users committed first.
fn map_pair_conflict(err: surrealdb::Error) -> Error {
    if let surrealdb::Error::Db(surrealdb::error::Db::IndexExists { index, .. }) = &err {
        if index == PAIR_INDEX {
            return Error::RequestAlreadyPending;
        }
    }

    // Remote engines flatten database errors into text.
    if err.to_string().contains(PAIR_INDEX) {
        return Error::RequestAlreadyPending;
    }

    Error::SurrealError(err)
}

/// Notification delivery is a best-effort side channel: a failed write is
/// logged and the committed edge mutation stands.
async fn notify_best_effort(sdb: &Surreal<Any>, input: NewNotification) {
    if let Err(err) = create_notification(sdb, input).await {
        warn!("failed to write connection notification: {err}");
    }
}
