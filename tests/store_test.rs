//! Store integration tests against a live PostgreSQL instance.
//!
//! These tests are marked `#[ignore]` by default because they require a
//! running database. To run explicitly:
//! ```bash
//! DATABASE_URL=postgres://localhost/boxoffice_test \
//!     cargo test --test store_test -- --ignored
//! ```
//! Each test creates its own rows (emails suffixed with a fresh uuid) and
//! asserts only on them, so the tests tolerate pre-existing data and can
//! run in parallel. The popular-events test is the exception: it truncates
//! the tables and should run on a dedicated test database.

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use boxoffice_server::models::{NewAttendee, NewEvent, NewOrganizer};
use boxoffice_server::store::Store;
use boxoffice_server::utils::error::AppError;

async fn test_store() -> Store {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/boxoffice_test".to_string());
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to the test database");
    sqlx::migrate!().run(&pool).await.expect("Failed to run migrations");
    Store::new(pool)
}

async fn make_organizer(store: &Store, tag: &str) -> Uuid {
    let suffix = Uuid::new_v4();
    store
        .create_organizer(&NewOrganizer {
            name: format!("Organizer {tag}"),
            email: format!("{tag}-{suffix}@test.example"),
            phone: None,
        })
        .await
        .unwrap()
        .id
}

async fn make_event(store: &Store, organizer_id: Uuid, tag: &str) -> Uuid {
    store
        .create_event(&NewEvent {
            name: format!("Event {tag}"),
            date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            location: "Test Hall".to_string(),
            description: None,
            organizer_id,
        })
        .await
        .unwrap()
        .id
}

async fn make_attendee(store: &Store, tag: &str) -> Uuid {
    let suffix = Uuid::new_v4();
    store
        .create_attendee(&NewAttendee {
            name: format!("Attendee {tag}"),
            email: format!("{tag}-{suffix}@test.example"),
            phone: None,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_double_registration_is_rejected() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "dup").await;
    let event = make_event(&store, organizer, "dup").await;
    let attendee = make_attendee(&store, "dup").await;

    store.register(event, attendee).await.unwrap();
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 1);

    let err = store.register(event, attendee).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateRegistration));
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 1);
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_unregister_missing_pair_is_a_noop() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "noop").await;
    let event = make_event(&store, organizer, "noop").await;
    let attendee = make_attendee(&store, "noop").await;

    store.unregister(event, attendee).await.unwrap();
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_register_unregister_scenario() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "scenario").await;
    let event = make_event(&store, organizer, "scenario").await;
    let attendee = make_attendee(&store, "scenario").await;

    store.register(event, attendee).await.unwrap();
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 1);

    assert!(store.register(event, attendee).await.is_err());
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 1);

    store.unregister(event, attendee).await.unwrap();
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_organizer_with_events_cannot_be_deleted() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "guard").await;
    let event = make_event(&store, organizer, "guard").await;

    let err = store.delete_organizer(organizer).await.unwrap_err();
    assert!(matches!(err, AppError::HasDependents(_)));

    // Both rows untouched.
    assert!(store.get_organizer(organizer).await.unwrap().is_some());
    assert!(store.get_event(event).await.unwrap().is_some());
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_organizer_without_events_is_deleted() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "free").await;

    store.delete_organizer(organizer).await.unwrap();
    assert!(store.get_organizer(organizer).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_event_deletion_cascades_tickets() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "cascade").await;
    let event = make_event(&store, organizer, "cascade").await;
    let first = make_attendee(&store, "cascade-a").await;
    let second = make_attendee(&store, "cascade-b").await;

    store.register(event, first).await.unwrap();
    store.register(event, second).await.unwrap();
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 2);

    store.delete_event(event).await.unwrap();
    assert!(store.get_event(event).await.unwrap().is_none());
    assert_eq!(store.ticket_count_for_event(event).await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_attendee_with_tickets_cannot_be_deleted() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "held").await;
    let event = make_event(&store, organizer, "held").await;
    let attendee = make_attendee(&store, "held").await;
    store.register(event, attendee).await.unwrap();

    let err = store.delete_attendee(attendee).await.unwrap_err();
    assert!(matches!(err, AppError::HasDependents(_)));
    assert!(store.get_attendee(attendee).await.unwrap().is_some());
}

#[tokio::test]
#[ignore] // Requires Postgres running
async fn test_available_attendees_excludes_registered() {
    let store = test_store().await;
    let organizer = make_organizer(&store, "avail").await;
    let event = make_event(&store, organizer, "avail").await;
    let registered = make_attendee(&store, "avail-in").await;
    let unregistered = make_attendee(&store, "avail-out").await;

    store.register(event, registered).await.unwrap();

    let available = store.available_attendees(event).await.unwrap();
    assert!(available.iter().any(|a| a.id == unregistered));
    assert!(!available.iter().any(|a| a.id == registered));

    let holders = store.registered_attendees(event).await.unwrap();
    assert!(holders.iter().any(|a| a.id == registered));
}

#[tokio::test]
#[ignore] // Requires Postgres running; truncates tables, use a dedicated test database
async fn test_popular_events_ranking() {
    let store = test_store().await;
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(
            &std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/boxoffice_test".to_string()),
        )
        .await
        .unwrap();
    sqlx::query("TRUNCATE tickets, events, attendees, organizers CASCADE")
        .execute(&pool)
        .await
        .unwrap();

    let organizer = make_organizer(&store, "rank").await;
    let ticket_counts = [3usize, 1, 0, 5, 2, 4];

    let mut attendees = Vec::new();
    for i in 0..5 {
        attendees.push(make_attendee(&store, &format!("rank-{i}")).await);
    }
    for (position, &count) in ticket_counts.iter().enumerate() {
        let event = make_event(&store, organizer, &format!("rank-{position}")).await;
        for attendee in attendees.iter().take(count) {
            store.register(event, *attendee).await.unwrap();
        }
    }

    let dashboard = store.dashboard().await.unwrap();
    let ranked: Vec<i64> = dashboard
        .popular_events
        .iter()
        .map(|e| e.ticket_count)
        .collect();
    assert_eq!(ranked, vec![5, 4, 3, 2, 1]);
}
