use nextstep_api::connections::{mutations, queries};
use nextstep_api::models::user::UserRole;

mod common;
use common::{mem_state, seed_user};

#[tokio::test]
async fn accepted_list_is_enriched_with_counterpart_profiles() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;
    let carol = seed_user(&state, "auth_carol", "Carol", UserRole::Mentor).await;

    let to_bob =
        mutations::send_connection_request(&state.sdb, alice.id.clone(), bob.id.clone(), None)
            .await
            .expect("request bob");
    mutations::accept_connection_request(&state.sdb, to_bob.connection_id, bob.id.clone())
        .await
        .expect("bob accepts");

    // Carol reaches out to Alice, so Alice sits on the receiving side here.
    let from_carol =
        mutations::send_connection_request(&state.sdb, carol.id.clone(), alice.id.clone(), None)
            .await
            .expect("carol requests");
    mutations::accept_connection_request(&state.sdb, from_carol.connection_id, alice.id.clone())
        .await
        .expect("alice accepts");

    let connections = queries::get_connections(&state.sdb, &alice.id)
        .await
        .expect("connections");
    assert_eq!(connections.len(), 2);

    let mut names: Vec<_> = connections
        .iter()
        .filter_map(|c| c.connected_user.as_ref().map(|u| u.name.clone()))
        .collect();
    names.sort();
    assert_eq!(names, vec!["Bob".to_string(), "Carol".to_string()]);

    // Ordering is deterministic across reads.
    let again = queries::get_connections(&state.sdb, &alice.id)
        .await
        .expect("connections again");
    let ids: Vec<_> = connections.iter().map(|c| c.connection.id.clone()).collect();
    let ids_again: Vec<_> = again.iter().map(|c| c.connection.id.clone()).collect();
    assert_eq!(ids, ids_again);
}

#[tokio::test]
async fn pending_lists_split_by_direction() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;
    let carol = seed_user(&state, "auth_carol", "Carol", UserRole::Mentor).await;

    mutations::send_connection_request(
        &state.sdb,
        bob.id.clone(),
        alice.id.clone(),
        Some("mentoring?".to_string()),
    )
    .await
    .expect("bob requests");
    mutations::send_connection_request(&state.sdb, carol.id.clone(), alice.id.clone(), None)
        .await
        .expect("carol requests");

    let inbound = queries::get_inbound_requests(&state.sdb, &alice.id)
        .await
        .expect("inbound");
    assert_eq!(inbound.len(), 2);
    let mut requester_names: Vec<_> = inbound
        .iter()
        .filter_map(|r| r.requester_user.as_ref().map(|u| u.name.clone()))
        .collect();
    requester_names.sort();
    assert_eq!(requester_names, vec!["Bob".to_string(), "Carol".to_string()]);
    assert!(
        inbound
            .iter()
            .any(|r| r.connection.message.as_deref() == Some("mentoring?"))
    );

    let outbound = queries::get_outbound_requests(&state.sdb, &bob.id)
        .await
        .expect("outbound");
    assert_eq!(outbound.len(), 1);
    assert_eq!(
        outbound[0].receiver_user.as_ref().map(|u| u.name.as_str()),
        Some("Alice")
    );

    assert_eq!(
        queries::get_pending_request_count(&state.sdb, &alice.id)
            .await
            .expect("count"),
        2
    );
    assert_eq!(
        queries::get_pending_request_count(&state.sdb, &bob.id)
            .await
            .expect("count"),
        0
    );
}

#[tokio::test]
async fn resolved_edges_leave_the_pending_lists() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;
    let carol = seed_user(&state, "auth_carol", "Carol", UserRole::Mentor).await;

    let from_bob =
        mutations::send_connection_request(&state.sdb, bob.id.clone(), alice.id.clone(), None)
            .await
            .expect("bob requests");
    let from_carol =
        mutations::send_connection_request(&state.sdb, carol.id.clone(), alice.id.clone(), None)
            .await
            .expect("carol requests");

    mutations::accept_connection_request(&state.sdb, from_bob.connection_id, alice.id.clone())
        .await
        .expect("accept bob");
    mutations::reject_connection_request(&state.sdb, from_carol.connection_id, alice.id.clone())
        .await
        .expect("reject carol");

    assert!(
        queries::get_inbound_requests(&state.sdb, &alice.id)
            .await
            .expect("inbound")
            .is_empty()
    );
    assert!(
        queries::get_outbound_requests(&state.sdb, &carol.id)
            .await
            .expect("outbound")
            .is_empty()
    );

    // Only the accepted edge shows up in the connection list.
    let connections = queries::get_connections(&state.sdb, &alice.id)
        .await
        .expect("connections");
    assert_eq!(connections.len(), 1);
    assert_eq!(
        connections[0]
            .connected_user
            .as_ref()
            .map(|u| u.name.as_str()),
        Some("Bob")
    );
}
