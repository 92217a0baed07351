//! Snapshot persistence
//!
//! Serializes the full `{users, rumors}` state to a single record in a
//! SQLite key-value table. The byte store is opaque: one fixed key, one
//! JSON blob. Round-trip fidelity is the only contract; the store layers
//! its degraded-mode policy (seed on read failure, absorb on write failure)
//! on top of the honest results returned here.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::models::State;
use crate::storage::error::{StorageError, StorageResult};

/// The fixed key the full state record is stored under
pub const SNAPSHOT_KEY: &str = "gossip_state";

/// Key-value snapshot store backed by SQLite
pub struct SnapshotStore {
    conn: Connection,
}

impl SnapshotStore {
    /// Open (or create) the snapshot database at the given path
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory snapshot store (tests, memory-only mode)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Serialize and write the full state under the fixed key
    pub fn save(&self, state: &State) -> StorageResult<()> {
        let blob = serde_json::to_vec(state)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO snapshots (key, value) VALUES (?1, ?2)",
            params![SNAPSHOT_KEY, blob],
        )?;
        Ok(())
    }

    /// Read and decode the stored state
    ///
    /// Returns `Ok(None)` when no snapshot has been written yet. A present
    /// but undecodable blob is an error at this layer.
    pub fn load(&self) -> StorageResult<Option<State>> {
        let blob: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match blob {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Delete the stored snapshot, if any
    pub fn clear(&self) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM snapshots WHERE key = ?1", params![SNAPSHOT_KEY])?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS snapshots (
            key TEXT PRIMARY KEY,
            value BLOB NOT NULL
        );
        "#,
    )
}
