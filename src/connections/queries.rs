use surrealdb::{RecordId, Surreal, engine::any::Any};

use crate::connections::mutations::edge_between;
use crate::consts::db_const::CONNECTION_TABLE;
use crate::errors::Result;
use crate::models::connection::{
    Connection, ConnectionStanding, ConnectionStatus, ConnectionWithUser, Direction,
    InboundRequest, OutboundRequest, PairStatus,
};
use crate::users::queries::get_user;

/// Standing of the pair from `user_id`'s perspective. Pure read.
pub async fn get_connection_status(
    sdb: &Surreal<Any>,
    user_id: &RecordId,
    other_user_id: &RecordId,
) -> Result<ConnectionStanding> {
    if let Some(edge) = edge_between(sdb, user_id, other_user_id).await? {
        return Ok(standing_from(edge, Direction::Outbound));
    }

    if let Some(edge) = edge_between(sdb, other_user_id, user_id).await? {
        return Ok(standing_from(edge, Direction::Inbound));
    }

    Ok(ConnectionStanding::none())
}

fn standing_from(edge: Connection, direction: Direction) -> ConnectionStanding {
    match edge.status {
        ConnectionStatus::Pending => ConnectionStanding {
            status: PairStatus::Pending,
            direction: Some(direction),
            connection_id: Some(edge.id),
        },
        ConnectionStatus::Accepted => ConnectionStanding {
            status: PairStatus::Accepted,
            direction: None,
            connection_id: Some(edge.id),
        },
        // A rejected edge is supersedable, so it reads as no active edge.
        ConnectionStatus::Rejected => ConnectionStanding::none(),
    }
}

/// All accepted connections of a user, enriched with the counterpart's
/// profile.
pub async fn get_connections(
    sdb: &Surreal<Any>,
    user_id: &RecordId,
) -> Result<Vec<ConnectionWithUser>> {
    let mut edges = edges_with_status(sdb, "requesterId", user_id, ConnectionStatus::Accepted)
        .await?;
    edges.extend(edges_with_status(sdb, "receiverId", user_id, ConnectionStatus::Accepted).await?);
    sort_newest_first(&mut edges);

    let mut connections = Vec::with_capacity(edges.len());
    for edge in edges {
        let other_user_id = if edge.requester_id == *user_id {
            &edge.receiver_id
        } else {
            &edge.requester_id
        };
        let connected_user = get_user(sdb, other_user_id).await?.map(Into::into);
        connections.push(ConnectionWithUser {
            connection: edge,
            connected_user,
        });
    }

    Ok(connections)
}

/// Pending requests other users sent to `user_id`, enriched with the
/// requester's profile.
pub async fn get_inbound_requests(
    sdb: &Surreal<Any>,
    user_id: &RecordId,
) -> Result<Vec<InboundRequest>> {
    let mut edges =
        edges_with_status(sdb, "receiverId", user_id, ConnectionStatus::Pending).await?;
    sort_newest_first(&mut edges);

    let mut requests = Vec::with_capacity(edges.len());
    for edge in edges {
        let requester_user = get_user(sdb, &edge.requester_id).await?.map(Into::into);
        requests.push(InboundRequest {
            connection: edge,
            requester_user,
        });
    }

    Ok(requests)
}

/// Pending requests `user_id` sent out, enriched with the receiver's
/// profile.
pub async fn get_outbound_requests(
    sdb: &Surreal<Any>,
    user_id: &RecordId,
) -> Result<Vec<OutboundRequest>> {
    let mut edges =
        edges_with_status(sdb, "requesterId", user_id, ConnectionStatus::Pending).await?;
    sort_newest_first(&mut edges);

    let mut requests = Vec::with_capacity(edges.len());
    for edge in edges {
        let receiver_user = get_user(sdb, &edge.receiver_id).await?.map(Into::into);
        requests.push(OutboundRequest {
            connection: edge,
            receiver_user,
        });
    }

    Ok(requests)
}

/// Badge count of pending inbound requests.
pub async fn get_pending_request_count(sdb: &Surreal<Any>, user_id: &RecordId) -> Result<usize> {
    #[derive(serde::Deserialize)]
    struct CountRow {
        count: usize,
    }

    let count = sdb
        .query(
            "SELECT count() FROM type::table($table) \
             WHERE receiverId = $user AND status = $status GROUP ALL;",
        )
        .bind(("table", CONNECTION_TABLE))
        .bind(("user", user_id.clone()))
        .bind(("status", ConnectionStatus::Pending))
        .await?
        .take::<Vec<CountRow>>(0)?
        .into_iter()
        .next()
        .map(|row| row.count)
        .unwrap_or(0);

    Ok(count)
}

async fn edges_with_status(
    sdb: &Surreal<Any>,
    side: &'static str,
    user_id: &RecordId,
    status: ConnectionStatus,
) -> Result<Vec<Connection>> {
    let query = format!(
        "SELECT * FROM type::table($table) WHERE {side} = $user AND status = $status;"
    );

    let edges = sdb
        .query(query)
        .bind(("table", CONNECTION_TABLE))
        .bind(("user", user_id.clone()))
        .bind(("status", status))
        .await?
        .take::<Vec<Connection>>(0)?;

    Ok(edges)
}

/// `createdAt` descending, record-id ordering on ties, so list output is
/// deterministic.
fn sort_newest_first(edges: &mut [Connection]) {
    edges.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
    });
}
