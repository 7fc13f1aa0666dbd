//! # roster-core
//!
//! Domain model for the roster user directory.
//!
//! Provides the durable [`UserRecord`] entity with its ordered
//! [`WorkExperience`] sub-records, the [`UserPatch`] partial record used
//! for creation and editing, pure field validators, and the built-in seed
//! dataset used when no persisted collection exists.
//!
//! This crate holds no state and performs no I/O; the store crate owns
//! the collection lifecycle.

pub mod seed;
pub mod user;
pub mod validation;

// ── re-exports ───────────────────────────────────────────────────────

pub use seed::seed_users;
pub use user::{UserPatch, UserRecord, WorkExperience};
pub use validation::{validate_birth_year, validate_email, validate_phone, validate_pincode};
