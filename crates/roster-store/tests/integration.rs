//! End-to-end tests: hydration and seed fallback, debounced persistence,
//! the message lifecycle, and the accessor contract.

use std::time::Duration;

use roster_core::{UserPatch, UserRecord, seed_users};
use roster_store::{Action, Storage, StoreError, USERS_SLOT, UserStore};

fn draft(first: &str, last: &str, email: &str) -> UserPatch {
    UserPatch {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    }
}

async fn open_seeded() -> (Storage, UserStore) {
    let storage = Storage::open_in_memory().unwrap();
    let store = UserStore::open(storage.clone()).await;
    (storage, store)
}

// ── hydration ────────────────────────────────────────────────────────

#[tokio::test]
async fn hydrates_seed_when_slot_absent() {
    let (_storage, store) = open_seeded().await;

    let state = store.snapshot();
    assert_eq!(state.users, seed_users());
    assert!(!state.loading);
    assert!(state.current_user.is_none());
}

#[tokio::test]
async fn hydrates_from_persisted_slot() {
    let storage = Storage::open_in_memory().unwrap();

    let persisted = vec![
        UserRecord::create(draft("Ada", "Lovelace", "ada@x.com")),
        UserRecord::create(draft("Grace", "Hopper", "grace@x.com")),
    ];
    storage
        .write_slot(USERS_SLOT, &serde_json::to_string(&persisted).unwrap())
        .await
        .unwrap();

    let store = UserStore::open(storage).await;
    assert_eq!(store.snapshot().users, persisted);
}

#[tokio::test]
async fn falls_back_to_seed_on_blank_slot() {
    let storage = Storage::open_in_memory().unwrap();
    storage.write_slot(USERS_SLOT, "   ").await.unwrap();

    let store = UserStore::open(storage).await;
    assert_eq!(store.snapshot().users, seed_users());
}

#[tokio::test]
async fn falls_back_to_seed_on_malformed_slot() {
    let storage = Storage::open_in_memory().unwrap();
    storage
        .write_slot(USERS_SLOT, "{definitely not json")
        .await
        .unwrap();

    let store = UserStore::open(storage).await;
    assert_eq!(store.snapshot().users, seed_users());
}

// ── persistence ──────────────────────────────────────────────────────

#[tokio::test]
async fn rapid_mutations_coalesce_into_one_write() {
    let (storage, store) = open_seeded().await;
    let users = store.handle();

    for i in 0..3 {
        users
            .add_user(draft(&format!("user{i}"), "Test", &format!("u{i}@x.com")))
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
    }

    // Still inside the debounce window: nothing written yet.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(storage.read_slot(USERS_SLOT).await.unwrap().is_none());

    // After the window: one write, holding the final state.
    tokio::time::sleep(Duration::from_millis(600)).await;
    let raw = storage.read_slot(USERS_SLOT).await.unwrap().unwrap();
    let written: Vec<UserRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(written, store.snapshot().users);
    assert_eq!(written.len(), seed_users().len() + 3);
}

#[tokio::test]
async fn round_trips_through_storage() {
    let (storage, store) = open_seeded().await;
    let users = store.handle();

    users
        .add_user(draft("Ada", "Lovelace", "ada@x.com"))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(800)).await;

    let expected = store.snapshot().users;
    drop(store);

    let reopened = UserStore::open(storage).await;
    assert_eq!(reopened.snapshot().users, expected);
}

#[tokio::test]
async fn teardown_cancels_the_pending_write() {
    let (storage, store) = open_seeded().await;
    store
        .handle()
        .add_user(draft("Ada", "L", "ada@x.com"))
        .unwrap();
    drop(store);

    // The debounced write was still pending at teardown; it must not
    // fire against the torn-down state.
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(storage.read_slot(USERS_SLOT).await.unwrap().is_none());
}

// ── message lifecycle ────────────────────────────────────────────────

#[tokio::test]
async fn messages_auto_clear_after_ttl() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();

    users
        .dispatch(Action::SetError("something broke".into()))
        .unwrap();
    assert_eq!(users.error().unwrap().as_deref(), Some("something broke"));

    tokio::time::sleep(Duration::from_millis(3400)).await;
    assert!(users.error().unwrap().is_none());
    assert!(users.success_message().unwrap().is_none());
}

#[tokio::test]
async fn new_message_restarts_the_clear_timer() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();

    users.dispatch(Action::SetError("boom".into())).unwrap();
    tokio::time::sleep(Duration::from_millis(2000)).await;
    users.dispatch(Action::SetSuccess("saved".into())).unwrap();

    // 3.8 s after the error, but only 1.8 s after the success: the shared
    // timer was restarted, so both messages are still up.
    tokio::time::sleep(Duration::from_millis(1800)).await;
    assert!(users.error().unwrap().is_some());
    assert!(users.success_message().unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert!(users.error().unwrap().is_none());
    assert!(users.success_message().unwrap().is_none());
}

#[tokio::test]
async fn unrelated_dispatch_does_not_extend_a_message() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();

    users.dispatch(Action::SetError("boom".into())).unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    users.dispatch(Action::SetLoading(true)).unwrap();

    tokio::time::sleep(Duration::from_millis(1900)).await;
    assert!(users.error().unwrap().is_none());
    assert!(users.loading().unwrap());
}

// ── accessor contract ────────────────────────────────────────────────

#[tokio::test]
async fn scenario_add_update_delete() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();
    let initial_len = users.users().unwrap().len();

    users
        .add_user(draft("Ada", "Lovelace", "ada@x.com"))
        .unwrap();

    let collection = users.users().unwrap();
    assert_eq!(collection.len(), initial_len + 1);
    let added = collection
        .iter()
        .find(|u| u.email == "ada@x.com")
        .unwrap()
        .clone();
    assert!(!added.id.is_empty());
    assert_eq!(added.created_at, added.updated_at);
    assert!(added.work_experience.is_empty());

    users
        .update_user(
            &added.id,
            UserPatch {
                skills: Some("math".into()),
                ..Default::default()
            },
        )
        .unwrap();

    let updated = users.current_user().unwrap().unwrap();
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.skills, "math");
    assert!(updated.updated_at >= added.updated_at);

    // Everything but skills and the update stamp is untouched.
    let mut expected = added.clone();
    expected.skills = "math".into();
    expected.updated_at = updated.updated_at;
    assert_eq!(updated, expected);

    users.delete_user(&added.id).unwrap();
    assert_eq!(users.users().unwrap().len(), initial_len);
}

#[tokio::test]
async fn add_user_requires_identity_fields() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();

    let no_email = UserPatch {
        first_name: Some("Ada".into()),
        ..Default::default()
    };
    assert!(matches!(
        users.add_user(no_email),
        Err(StoreError::InvalidArgument(_))
    ));

    assert!(matches!(
        users.add_user(draft("Ada", "Lovelace", "not-an-email")),
        Err(StoreError::InvalidArgument(_))
    ));

    let no_name = UserPatch {
        first_name: Some("   ".into()),
        email: Some("ada@x.com".into()),
        ..Default::default()
    };
    assert!(matches!(
        users.add_user(no_name),
        Err(StoreError::InvalidArgument(_))
    ));

    assert_eq!(users.users().unwrap().len(), seed_users().len());
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();

    let result = users.update_user(
        "no-such-id",
        UserPatch {
            skills: Some("math".into()),
            ..Default::default()
        },
    );

    match result.unwrap_err() {
        StoreError::NotFound { entity, id } => {
            assert_eq!(entity, "user");
            assert_eq!(id, "no-such-id");
        }
        other => panic!("expected NotFound, got: {other}"),
    }
}

#[tokio::test]
async fn delete_unknown_id_reports_success() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();
    let before = users.users().unwrap();

    users.delete_user("no-such-id").unwrap();

    assert_eq!(users.users().unwrap(), before);
    assert!(users.success_message().unwrap().is_some());
}

#[tokio::test]
async fn selection_via_escape_hatch() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();
    let first = users.users().unwrap()[0].clone();

    users
        .dispatch(Action::SetCurrentUser(Some(first.id.clone())))
        .unwrap();
    assert_eq!(users.current_user().unwrap(), Some(first));

    users.dispatch(Action::SetCurrentUser(None)).unwrap();
    assert_eq!(users.current_user().unwrap(), None);
}

#[tokio::test]
async fn handle_fails_fast_after_teardown() {
    let (_storage, store) = open_seeded().await;
    let users = store.handle();
    drop(store);

    assert!(matches!(users.users(), Err(StoreError::SessionClosed)));
    assert!(matches!(
        users.add_user(draft("Ada", "L", "ada@x.com")),
        Err(StoreError::SessionClosed)
    ));
    assert!(matches!(
        users.dispatch(Action::ClearMessages),
        Err(StoreError::SessionClosed)
    ));
    assert!(matches!(users.snapshot(), Err(StoreError::SessionClosed)));
}

#[tokio::test]
async fn subscribers_observe_mutations() {
    let (_storage, store) = open_seeded().await;
    let mut rx = store.subscribe();
    let users = store.handle();

    users
        .add_user(draft("Ada", "Lovelace", "ada@x.com"))
        .unwrap();

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().users.len(), seed_users().len() + 1);
}
