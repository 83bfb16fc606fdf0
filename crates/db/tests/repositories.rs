//! Integration tests for the repository layer.

use ripple_core::event::{STATUS_READ, STATUS_UNREAD};
use ripple_db::repositories::{DeadLetterRepo, EventRepo, NotificationRepo, UserRepo};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn insert_and_fetch_event(pool: PgPool) {
    let event_id = Uuid::new_v4();
    let payload = serde_json::json!({"postId": "p1", "postOwnerId": "u2"});

    let stored = EventRepo::insert(&pool, event_id, "like", "u1", None, Some(&payload))
        .await
        .unwrap();

    assert_eq!(stored.event_id, event_id);
    assert_eq!(stored.kind, "like");
    assert_eq!(stored.source_user_id, "u1");
    assert_eq!(stored.payload, Some(payload));

    let fetched = EventRepo::get(&pool, event_id).await.unwrap().unwrap();
    assert_eq!(fetched.event_id, event_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn events_with_unknown_kind_are_stored(pool: PgPool) {
    // The store is kind-agnostic; unknown kinds are an ingestion concern.
    EventRepo::insert(&pool, Uuid::new_v4(), "bogus", "u1", None, None)
        .await
        .unwrap();

    assert_eq!(EventRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_recent_pages_newest_first(pool: PgPool) {
    for kind in ["follow", "message", "like"] {
        EventRepo::insert(&pool, Uuid::new_v4(), kind, "u1", Some("u2"), None)
            .await
            .unwrap();
        // Keep creation timestamps distinct.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let page = EventRepo::list_recent(&pool, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].kind, "like");
    assert_eq!(page[1].kind, "message");

    let rest = EventRepo::list_recent(&pool, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].kind, "follow");
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn new_notifications_default_to_unread(pool: PgPool) {
    let n = NotificationRepo::insert(&pool, Uuid::new_v4(), "u2", "follow", "u1 started following you.")
        .await
        .unwrap();

    assert_eq!(n.status, STATUS_UNREAD);
    assert_eq!(n.user_id, "u2");
}

#[sqlx::test(migrations = "./migrations")]
async fn list_for_user_is_newest_first(pool: PgPool) {
    let first = NotificationRepo::insert(&pool, Uuid::new_v4(), "u2", "follow", "a")
        .await
        .unwrap();
    let second = NotificationRepo::insert(&pool, Uuid::new_v4(), "u2", "follow", "b")
        .await
        .unwrap();
    // A notification for someone else must not appear in u2's list.
    NotificationRepo::insert(&pool, Uuid::new_v4(), "u3", "follow", "c")
        .await
        .unwrap();

    let listed = NotificationRepo::list_for_user(&pool, "u2").await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].notification_id, second.notification_id);
    assert_eq!(listed[1].notification_id, first.notification_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn created_at_ties_are_broken_by_insertion_order(pool: PgPool) {
    // Force identical timestamps so only `seq` can order the rows.
    let ts: chrono::DateTime<chrono::Utc> = chrono::Utc::now();
    let (first, second) = (Uuid::new_v4(), Uuid::new_v4());
    for (id, content) in [(first, "first"), (second, "second")] {
        sqlx::query(
            "INSERT INTO notifications (notification_id, user_id, kind, content, created_at) \
             VALUES ($1, 'u2', 'follow', $2, $3)",
        )
        .bind(id)
        .bind(content)
        .bind(ts)
        .execute(&pool)
        .await
        .unwrap();
    }

    let listed = NotificationRepo::list_for_user(&pool, "u2").await.unwrap();

    assert_eq!(listed[0].notification_id, first);
    assert_eq!(listed[1].notification_id, second);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_for_unknown_user_is_empty_not_an_error(pool: PgPool) {
    let listed = NotificationRepo::list_for_user(&pool, "nobody").await.unwrap();
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_read_is_idempotent(pool: PgPool) {
    let n = NotificationRepo::insert(&pool, Uuid::new_v4(), "u2", "message", "hi")
        .await
        .unwrap();

    assert!(NotificationRepo::mark_read(&pool, n.notification_id).await.unwrap());
    // Marking again is a no-op that still reports success.
    assert!(NotificationRepo::mark_read(&pool, n.notification_id).await.unwrap());

    let listed = NotificationRepo::list_for_user(&pool, "u2").await.unwrap();
    assert_eq!(listed[0].status, STATUS_READ);
}

#[sqlx::test(migrations = "./migrations")]
async fn mark_read_reports_unknown_ids(pool: PgPool) {
    assert!(!NotificationRepo::mark_read(&pool, Uuid::new_v4()).await.unwrap());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_user_id_is_a_unique_violation(pool: PgPool) {
    UserRepo::insert(&pool, "u1", "alice", None, None).await.unwrap();

    let err = UserRepo::insert(&pool, "u1", "alice-again", None, None)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Dead letters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn dead_letters_reference_the_dropped_event(pool: PgPool) {
    let event = EventRepo::insert(&pool, Uuid::new_v4(), "bogus", "u1", None, None)
        .await
        .unwrap();

    DeadLetterRepo::insert(
        &pool,
        event.event_id,
        "unknown_event_type",
        Some("unknown event type: bogus"),
    )
    .await
    .unwrap();

    let letters = DeadLetterRepo::list_for_event(&pool, event.event_id)
        .await
        .unwrap();

    assert_eq!(letters.len(), 1);
    assert_eq!(letters[0].reason, "unknown_event_type");
}

#[sqlx::test(migrations = "./migrations")]
async fn recent_dead_letters_are_newest_first(pool: PgPool) {
    let event = EventRepo::insert(&pool, Uuid::new_v4(), "bogus", "u1", None, None)
        .await
        .unwrap();

    for reason in ["unknown_event_type", "storage_error"] {
        DeadLetterRepo::insert(&pool, event.event_id, reason, None)
            .await
            .unwrap();
    }

    let recent = DeadLetterRepo::list_recent(&pool, 10).await.unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].reason, "storage_error");
    assert_eq!(recent[1].reason, "unknown_event_type");
}
