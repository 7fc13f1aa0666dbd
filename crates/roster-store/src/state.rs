//! Application state and its mutation protocol.
//!
//! [`AppState`] is the canonical session state: the user collection plus
//! transient UI-feedback fields. Every mutation is expressed as an
//! [`Action`] and applied by [`reduce`], a total pure transition — no
//! variant panics, and unknown kinds are unrepresentable.

use roster_core::{UserPatch, UserRecord};

// ═══════════════════════════════════════════════════════════════════════
//  AppState
// ═══════════════════════════════════════════════════════════════════════

/// The whole session state. One instance per store; views receive owned
/// snapshots and never mutate in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// The user collection, in insertion order. Single source of truth.
    pub users: Vec<UserRecord>,
    /// Id of the currently-selected user, resolved against `users` on
    /// read — never a cached copy of the record.
    pub current_user: Option<String>,
    /// Whether hydration (or a simulated slow operation) is in flight.
    pub loading: bool,
    /// Active error message, if any. Self-clearing.
    pub error: Option<String>,
    /// Active success message, if any. Self-clearing.
    pub success: Option<String>,
}

impl AppState {
    /// The pre-hydration state: empty collection, loading flag raised.
    pub fn initial() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Find a record by id.
    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Resolve the currently-selected user against the collection.
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.current_user.as_deref().and_then(|id| self.find(id))
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Action
// ═══════════════════════════════════════════════════════════════════════

/// A typed description of one intended state change.
#[derive(Debug, Clone)]
pub enum Action {
    /// Raise or lower the loading flag.
    SetLoading(bool),
    /// Set the error message and lower the loading flag. Leaves any
    /// success message untouched.
    SetError(String),
    /// Set the success message. Leaves any error message untouched.
    SetSuccess(String),
    /// Clear both messages. Idempotent.
    ClearMessages,
    /// Replace the whole collection and lower the loading flag. Used only
    /// at hydration.
    LoadUsers(Vec<UserRecord>),
    /// Create a record from a draft and append it to the collection.
    AddUser(UserPatch),
    /// Patch the record with the given id and select it. Unknown ids
    /// leave the collection untouched.
    UpdateUser {
        /// Target record id.
        id: String,
        /// Fields to replace on the record.
        patch: UserPatch,
    },
    /// Remove the record with the given id. Unknown ids are a no-op.
    DeleteUser(String),
    /// Set or clear the selected-user id.
    SetCurrentUser(Option<String>),
}

impl Action {
    /// Whether applying this action calls for a persistence write.
    pub(crate) fn mutates_collection(&self) -> bool {
        matches!(
            self,
            Self::AddUser(_) | Self::UpdateUser { .. } | Self::DeleteUser(_)
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Reducer
// ═══════════════════════════════════════════════════════════════════════

/// Compute the next state from the previous state and one action.
///
/// Total and synchronous: every variant returns, none panics. Side
/// effects (persistence, message expiry) are the store's job, scheduled
/// after this function returns.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut state = state;
    match action {
        Action::SetLoading(flag) => {
            state.loading = flag;
        }
        Action::SetError(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        Action::SetSuccess(message) => {
            state.success = Some(message);
        }
        Action::ClearMessages => {
            state.error = None;
            state.success = None;
        }
        Action::LoadUsers(users) => {
            state.users = users;
            state.loading = false;
        }
        Action::AddUser(draft) => {
            state.users.push(UserRecord::create(draft));
            state.success = Some("User added successfully".to_string());
        }
        Action::UpdateUser { id, patch } => {
            if let Some(record) = state.users.iter_mut().find(|u| u.id == id) {
                patch.apply(record);
                record.touch();
                state.current_user = Some(id);
            }
            // Unknown ids still report success through the raw dispatch
            // channel; the named accessor rejects them up front.
            state.success = Some("User updated successfully".to_string());
        }
        Action::DeleteUser(id) => {
            state.users.retain(|u| u.id != id);
            state.success = Some("User deleted successfully".to_string());
        }
        Action::SetCurrentUser(id) => {
            state.current_user = id;
        }
    }
    state
}

// ── tests ────────────────────────────────────────────────────────────
