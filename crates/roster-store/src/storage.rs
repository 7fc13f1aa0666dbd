//! SQLite-backed key-value slot storage.
//!
//! The store persists its user collection into a single named slot of a
//! `slots` table: one key, one JSON string value, overwritten wholesale
//! on every write. The [`Storage`] struct
//! wraps a `rusqlite::Connection` behind an `Arc<Mutex<>>` and exposes
//! async methods that use `tokio::task::spawn_blocking` to keep SQLite
//! calls off the async runtime.
//!
//! There is no migration framework: the schema is a single table created
//! at open, and stored values carry no version tag.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tracing::{debug, info, instrument};

use crate::error::{StoreError, StoreResult};

/// Thread-safe handle to the slot database.
#[derive(Clone)]
pub struct Storage {
    conn: Arc<Mutex<Connection>>,
}

impl Storage {
    /// Open (or create) the slot database at `path`.
    ///
    /// Applies the performance pragmas and creates the `slots` table if it
    /// does not exist. Blocks briefly on file I/O, so call it during
    /// startup or wrap it in `spawn_blocking` yourself.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "opening slot storage");

        let conn = Connection::open(path)?;
        Self::apply_pragmas(&conn)?;
        Self::ensure_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory slot database — useful for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        debug!("opening in-memory slot storage");

        let conn = Connection::open_in_memory()?;
        Self::apply_pragmas(&conn)?;
        Self::ensure_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Read the value stored in `key`, returning `None` if the slot has
    /// never been written.
    #[instrument(skip(self))]
    pub async fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        let key = key.to_string();
        self.execute(move |conn| {
            let result = conn.query_row(
                "SELECT value FROM slots WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            );
            match result {
                Ok(value) => Ok(Some(value)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    /// Write `value` into `key`, replacing any previous value.
    #[instrument(skip(self, value))]
    pub async fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO slots (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, value],
            )?;
            debug!(key = %key, "slot written");
            Ok(())
        })
        .await
    }

    /// Delete a slot, returning `true` if it existed.
    #[instrument(skip(self))]
    pub async fn clear_slot(&self, key: &str) -> StoreResult<bool> {
        let key = key.to_string();
        self.execute(move |conn| {
            let deleted = conn.execute("DELETE FROM slots WHERE key = ?1", rusqlite::params![key])?;
            Ok(deleted > 0)
        })
        .await
    }

    /// Execute a closure against the connection on the blocking pool.
    async fn execute<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StoreError::TaskJoin(format!("mutex poisoned: {e}")))?;
            f(&conn)
        })
        .await?
    }

    // ── setup ────────────────────────────────────────────────────────

    fn apply_pragmas(conn: &Connection) -> StoreResult<()> {
        // WAL mode: concurrent readers, non-blocking writes.
        conn.pragma_update(None, "journal_mode", "WAL")?;

        // NORMAL sync is safe with WAL — we only lose the last transaction
        // on a power failure, not corruption.
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        // Busy timeout so concurrent writers wait instead of failing immediately.
        conn.pragma_update(None, "busy_timeout", 5_000_i32)?;

        Ok(())
    }

    fn ensure_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

// ── tests ────────────────────────────────────────────────────────────
