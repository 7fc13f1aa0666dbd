//! The canonical state store.
//!
//! [`UserStore`] owns the session's [`AppState`] inside a
//! `tokio::sync::watch` channel: the store holds the sender, views hold
//! read-only receivers and see every state change as an owned snapshot.
//!
//! Mutations are applied synchronously under the sender's lock, then two
//! side effects are scheduled through [`Debouncer`]s:
//!
//! - collection mutations arm a 500 ms debounced write of the whole
//!   collection into the `users` storage slot (rapid edits coalesce into
//!   one write);
//! - a message transition arms a 3 s timer that dispatches
//!   [`Action::ClearMessages`].
//!
//! Storage is best-effort secondary: a failed write is logged and the
//! in-memory state stays authoritative. Dropping the store aborts both
//! pending timers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use roster_core::{UserRecord, seed_users};

use crate::debounce::Debouncer;
use crate::handle::UsersHandle;
use crate::state::{Action, AppState, reduce};
use crate::storage::Storage;

/// Storage slot holding the JSON-serialized user collection.
pub const USERS_SLOT: &str = "users";

/// Quiet period before the collection is written to storage.
pub const PERSIST_DEBOUNCE: Duration = Duration::from_millis(500);

/// How long an error or success message stays up before auto-clearing.
pub const MESSAGE_TTL: Duration = Duration::from_millis(3000);

// ═══════════════════════════════════════════════════════════════════════
//  UserStore
// ═══════════════════════════════════════════════════════════════════════

/// Owner of the canonical application state and its persistence
/// lifecycle. Construct one per session with [`UserStore::open`] and pass
/// [`UsersHandle`]s down to view code.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<StoreInner>,
}

pub(crate) struct StoreInner {
    pub(crate) state: watch::Sender<AppState>,
    storage: Storage,
    persist: Debouncer,
    clear: Debouncer,
}

impl UserStore {
    /// Open a store over `storage` and hydrate the collection.
    ///
    /// Reads the `users` slot; an absent, blank, or malformed slot (and a
    /// failed read) falls back to the built-in seed data. Hydration never
    /// fails and never schedules a persistence write.
    pub async fn open(storage: Storage) -> Self {
        let (state, _) = watch::channel(AppState::initial());
        let inner = Arc::new(StoreInner {
            state,
            storage,
            persist: Debouncer::new(),
            clear: Debouncer::new(),
        });

        let users = hydrate(&inner.storage).await;
        StoreInner::apply(&inner, Action::LoadUsers(users));

        Self { inner }
    }

    /// A façade handle for view code. Cheap to clone; outlives the store
    /// only in the sense that calls after teardown fail fast.
    pub fn handle(&self) -> UsersHandle {
        UsersHandle::new(Arc::downgrade(&self.inner))
    }

    /// Apply one action. Returns after the synchronous state transition;
    /// persistence and message expiry run in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, action: Action) {
        StoreInner::apply(&self.inner, action);
    }

    /// An owned snapshot of the current state.
    pub fn snapshot(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes. Each receiver observes every snapshot
    /// published after subscription.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }
}

impl StoreInner {
    /// Run the reducer under the sender's lock, publish the new snapshot,
    /// then schedule side effects.
    pub(crate) fn apply(inner: &Arc<Self>, action: Action) {
        let persists = action.mutates_collection();

        let mut messages_changed = false;
        let mut message_active = false;
        inner.state.send_modify(|state| {
            let error_before = state.error.clone();
            let success_before = state.success.clone();

            *state = reduce(std::mem::take(state), action);

            messages_changed =
                state.error != error_before || state.success != success_before;
            message_active = state.error.is_some() || state.success.is_some();
        });

        if persists {
            Self::schedule_persist(inner);
        }

        // The message timer restarts only on an actual message
        // transition; unrelated dispatches leave it running.
        if messages_changed {
            if message_active {
                Self::schedule_message_clear(inner);
            } else {
                inner.clear.cancel();
            }
        }
    }

    fn schedule_persist(inner: &Arc<Self>) {
        let weak = Arc::downgrade(inner);
        inner.persist.schedule(PERSIST_DEBOUNCE, async move {
            let Some(inner) = weak.upgrade() else {
                return;
            };

            let users = inner.state.borrow().users.clone();
            let payload = match serde_json::to_string(&users) {
                Ok(payload) => payload,
                Err(err) => {
                    warn!(%err, "failed to serialize user collection; skipping write");
                    return;
                }
            };

            match inner.storage.write_slot(USERS_SLOT, &payload).await {
                Ok(()) => debug!(count = users.len(), "user collection persisted"),
                Err(err) => warn!(%err, "failed to persist user collection"),
            }
        });
    }

    fn schedule_message_clear(inner: &Arc<Self>) {
        let weak = Arc::downgrade(inner);
        inner.clear.schedule(MESSAGE_TTL, async move {
            if let Some(inner) = weak.upgrade() {
                Self::apply(&inner, Action::ClearMessages);
            }
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Hydration
// ═══════════════════════════════════════════════════════════════════════

async fn hydrate(storage: &Storage) -> Vec<UserRecord> {
    match storage.read_slot(USERS_SLOT).await {
        Ok(Some(raw)) if !raw.trim().is_empty() => match serde_json::from_str::<Vec<UserRecord>>(&raw) {
            Ok(users) => {
                info!(count = users.len(), "hydrated user collection from storage");
                users
            }
            Err(err) => {
                warn!(%err, "persisted user collection is malformed; using seed data");
                seed_users()
            }
        },
        Ok(_) => {
            info!("no persisted user collection; using seed data");
            seed_users()
        }
        Err(err) => {
            warn!(%err, "failed to read persisted user collection; using seed data");
            seed_users()
        }
    }
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::UserPatch;

    #[tokio::test]
    async fn hydrate_prefers_the_slot_over_seed() {
        let storage = Storage::open_in_memory().unwrap();
        let persisted = vec![UserRecord::create(UserPatch {
            first_name: Some("Ada".into()),
            email: Some("ada@x.com".into()),
            ..Default::default()
        })];
        storage
            .write_slot(USERS_SLOT, &serde_json::to_string(&persisted).unwrap())
            .await
            .unwrap();

        assert_eq!(hydrate(&storage).await, persisted);
    }

    #[tokio::test]
    async fn hydrate_falls_back_to_seed() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(hydrate(&storage).await, seed_users());

        storage.write_slot(USERS_SLOT, "not json").await.unwrap();
        assert_eq!(hydrate(&storage).await, seed_users());
    }

    #[tokio::test]
    async fn dispatch_publishes_a_new_snapshot() {
        let storage = Storage::open_in_memory().unwrap();
        let store = UserStore::open(storage).await;
        let before = store.snapshot().users.len();

        store.dispatch(Action::AddUser(UserPatch {
            first_name: Some("Ada".into()),
            email: Some("ada@x.com".into()),
            ..Default::default()
        }));

        assert_eq!(store.snapshot().users.len(), before + 1);
    }
}
