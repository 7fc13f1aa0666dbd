//! # roster-store
//!
//! The canonical state store of the roster user directory.
//!
//! Holds the in-memory user collection, applies mutations through a
//! reducer-based action protocol, persists the collection into a SQLite
//! key-value slot with debounced writes, and derives self-expiring
//! UI-feedback messages.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  UsersHandle (named ops + dispatch + reads)  │
//! ├──────────────────────────────────────────────┤
//! │  UserStore                                   │
//! │    AppState in a watch channel               │
//! │    reduce(state, action) -> state            │
//! │    Debouncer: persist (500 ms)               │
//! │    Debouncer: message clear (3 s)            │
//! ├──────────────────────────────────────────────┤
//! │  Storage (rusqlite slots table)              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! use roster_store::{Storage, UserStore};
//! use roster_core::UserPatch;
//!
//! let storage = Storage::open("data/roster.db")?;
//! let store = UserStore::open(storage).await;
//!
//! let users = store.handle();
//! users.add_user(UserPatch {
//!     first_name: Some("Ada".into()),
//!     email: Some("ada@example.com".into()),
//!     ..Default::default()
//! })?;
//! ```

pub mod debounce;
pub mod error;
pub mod handle;
pub mod state;
pub mod storage;
pub mod store;

// ── re-exports ───────────────────────────────────────────────────────

pub use debounce::Debouncer;
pub use error::{StoreError, StoreResult};
pub use handle::UsersHandle;
pub use state::{Action, AppState, reduce};
pub use storage::Storage;
pub use store::{MESSAGE_TTL, PERSIST_DEBOUNCE, USERS_SLOT, UserStore};
