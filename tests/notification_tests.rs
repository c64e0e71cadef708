use nextstep_api::errors::Error;
use nextstep_api::models::notification::{NewNotification, NotificationType};
use nextstep_api::models::user::{User, UserRole};
use nextstep_api::notifications::{mutations, queries};
use nextstep_api::state::AppState;
use surrealdb::RecordId;

mod common;
use common::{mem_state, seed_user};

async fn push(state: &AppState, to: &User, from: &User, title: &str) -> RecordId {
    mutations::create_notification(
        &state.sdb,
        NewNotification {
            user_id: to.id.clone(),
            from_user_id: from.id.clone(),
            kind: NotificationType::Message,
            title: title.to_string(),
            body: None,
            related_connection_id: None,
        },
    )
    .await
    .expect("create notification")
    .id
}

#[tokio::test]
async fn read_state_belongs_to_the_recipient() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;

    let id = push(&state, &alice, &bob, "hello").await;

    let err = mutations::mark_as_read(&state.sdb, &id, &bob.id)
        .await
        .expect_err("only the recipient may mark read");
    assert!(matches!(err, Error::Forbidden));

    mutations::mark_as_read(&state.sdb, &id, &alice.id)
        .await
        .expect("mark read");

    let unread = queries::get_unread_notifications(&state.sdb, &alice.id)
        .await
        .expect("unread");
    assert!(unread.is_empty());

    let all = queries::get_notifications(&state.sdb, &alice.id, None)
        .await
        .expect("all");
    assert_eq!(all.len(), 1);
    assert!(all[0].notification.is_read);
    assert!(all[0].notification.read_at.is_some());

    mutations::mark_as_unread(&state.sdb, &id, &alice.id)
        .await
        .expect("mark unread");
    let all = queries::get_notifications(&state.sdb, &alice.id, None)
        .await
        .expect("all");
    assert!(!all[0].notification.is_read);
    assert!(all[0].notification.read_at.is_none());
}

#[tokio::test]
async fn star_toggle_flips_and_filters() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;

    let id = push(&state, &alice, &bob, "hello").await;

    let starred = mutations::toggle_star(&state.sdb, &id, &alice.id)
        .await
        .expect("star");
    assert!(starred);

    let starred_list = queries::get_starred_notifications(&state.sdb, &alice.id)
        .await
        .expect("starred");
    assert_eq!(starred_list.len(), 1);

    let starred = mutations::toggle_star(&state.sdb, &id, &alice.id)
        .await
        .expect("unstar");
    assert!(!starred);
    assert!(
        queries::get_starred_notifications(&state.sdb, &alice.id)
            .await
            .expect("starred")
            .is_empty()
    );
}

#[tokio::test]
async fn bulk_operations_only_touch_the_callers_rows() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;

    push(&state, &alice, &bob, "one").await;
    push(&state, &alice, &bob, "two").await;
    push(&state, &bob, &alice, "three").await;

    let count = mutations::mark_all_as_read(&state.sdb, &alice.id)
        .await
        .expect("mark all read");
    assert_eq!(count, 2);
    assert!(
        queries::get_unread_notifications(&state.sdb, &alice.id)
            .await
            .expect("unread")
            .is_empty()
    );
    assert_eq!(
        queries::get_unread_notifications(&state.sdb, &bob.id)
            .await
            .expect("unread")
            .len(),
        1
    );

    let deleted = mutations::delete_all_notifications(&state.sdb, &alice.id)
        .await
        .expect("delete all");
    assert_eq!(deleted, 2);
    assert!(
        queries::get_notifications(&state.sdb, &alice.id, None)
            .await
            .expect("all")
            .is_empty()
    );
    assert_eq!(
        queries::get_notifications(&state.sdb, &bob.id, None)
            .await
            .expect("all")
            .len(),
        1
    );
}

#[tokio::test]
async fn delete_checks_ownership_and_existence() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;

    let missing = RecordId::from_table_key("notifications", "missing");
    let err = mutations::delete_notification(&state.sdb, &missing, &alice.id)
        .await
        .expect_err("unknown notification");
    assert!(matches!(err, Error::NotificationNotFound));

    let id = push(&state, &alice, &bob, "hello").await;

    let err = mutations::delete_notification(&state.sdb, &id, &bob.id)
        .await
        .expect_err("only the recipient may delete");
    assert!(matches!(err, Error::Forbidden));

    mutations::delete_notification(&state.sdb, &id, &alice.id)
        .await
        .expect("delete");
    assert!(
        queries::get_notifications(&state.sdb, &alice.id, None)
            .await
            .expect("all")
            .is_empty()
    );
}

#[tokio::test]
async fn list_respects_the_limit() {
    let state = mem_state().await;
    let alice = seed_user(&state, "auth_alice", "Alice", UserRole::Student).await;
    let bob = seed_user(&state, "auth_bob", "Bob", UserRole::Mentor).await;

    for i in 0..3 {
        push(&state, &alice, &bob, &format!("n{i}")).await;
    }

    let limited = queries::get_notifications(&state.sdb, &alice.id, Some(2))
        .await
        .expect("limited");
    assert_eq!(limited.len(), 2);

    let all = queries::get_notifications(&state.sdb, &alice.id, None)
        .await
        .expect("all");
    assert_eq!(all.len(), 3);

    // An absurd limit is clamped instead of being handed to the store raw.
    let clamped = queries::get_notifications(&state.sdb, &alice.id, Some(usize::MAX))
        .await
        .expect("clamped");
    assert_eq!(clamped.len(), 3);
}
