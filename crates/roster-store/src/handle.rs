//! The accessor façade.
//!
//! [`UsersHandle`] is the narrow API view code talks to: the three named
//! mutations plus pass-through reads, all forwarded to the store. The
//! handle holds a weak reference — using one after the store has been
//! torn down fails fast with [`StoreError::SessionClosed`] instead of
//! operating on dead state.

use std::sync::{Arc, Weak};

use tokio::sync::watch;

use roster_core::{UserPatch, UserRecord, validate_email};

use crate::error::{StoreError, StoreResult};
use crate::state::{Action, AppState};
use crate::store::StoreInner;

/// Named-operation façade over the store's dispatch channel. Cheap to
/// clone; holds no state of its own.
#[derive(Clone)]
pub struct UsersHandle {
    inner: Weak<StoreInner>,
}

impl UsersHandle {
    pub(crate) fn new(inner: Weak<StoreInner>) -> Self {
        Self { inner }
    }

    fn store(&self) -> StoreResult<Arc<StoreInner>> {
        self.inner.upgrade().ok_or(StoreError::SessionClosed)
    }

    // ── mutations ────────────────────────────────────────────────────

    /// Add a new user from a draft.
    ///
    /// Structural validation only: the draft must carry a non-blank first
    /// name and a well-formed email. Everything else defaults to empty.
    pub fn add_user(&self, draft: UserPatch) -> StoreResult<()> {
        let store = self.store()?;

        if !draft
            .first_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
        {
            return Err(StoreError::InvalidArgument(
                "first name must not be empty".into(),
            ));
        }
        match draft.email.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(StoreError::InvalidArgument("email must not be empty".into()));
            }
            Some(email) if !validate_email(email) => {
                return Err(StoreError::InvalidArgument(format!(
                    "malformed email address: {email}"
                )));
            }
            Some(_) => {}
        }

        StoreInner::apply(&store, Action::AddUser(draft));
        Ok(())
    }

    /// Patch the user with the given id.
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id — the silent
    /// success of the raw dispatch channel is not reachable through here.
    pub fn update_user(&self, id: &str, patch: UserPatch) -> StoreResult<()> {
        let store = self.store()?;

        if store.state.borrow().find(id).is_none() {
            return Err(StoreError::NotFound {
                entity: "user",
                id: id.to_string(),
            });
        }

        StoreInner::apply(
            &store,
            Action::UpdateUser {
                id: id.to_string(),
                patch,
            },
        );
        Ok(())
    }

    /// Remove the user with the given id. Deleting an unknown id is a
    /// no-op that still reports success.
    pub fn delete_user(&self, id: &str) -> StoreResult<()> {
        let store = self.store()?;
        StoreInner::apply(&store, Action::DeleteUser(id.to_string()));
        Ok(())
    }

    /// Generic dispatch escape hatch for UI-only transitions (loading
    /// flag, messages, selection).
    pub fn dispatch(&self, action: Action) -> StoreResult<()> {
        let store = self.store()?;
        StoreInner::apply(&store, action);
        Ok(())
    }

    // ── reads ────────────────────────────────────────────────────────

    /// The current user collection, in insertion order.
    pub fn users(&self) -> StoreResult<Vec<UserRecord>> {
        Ok(self.store()?.state.borrow().users.clone())
    }

    /// The currently-selected user, resolved by id against the
    /// collection.
    pub fn current_user(&self) -> StoreResult<Option<UserRecord>> {
        let store = self.store()?;
        let state = store.state.borrow();
        Ok(state.selected_user().cloned())
    }

    /// Whether hydration (or a simulated slow operation) is in flight.
    pub fn loading(&self) -> StoreResult<bool> {
        Ok(self.store()?.state.borrow().loading)
    }

    /// The active error message, if any.
    pub fn error(&self) -> StoreResult<Option<String>> {
        Ok(self.store()?.state.borrow().error.clone())
    }

    /// The active success message, if any.
    pub fn success_message(&self) -> StoreResult<Option<String>> {
        Ok(self.store()?.state.borrow().success.clone())
    }

    /// An owned snapshot of the whole state.
    pub fn snapshot(&self) -> StoreResult<AppState> {
        Ok(self.store()?.state.borrow().clone())
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StoreResult<watch::Receiver<AppState>> {
        Ok(self.store()?.state.subscribe())
    }
}
