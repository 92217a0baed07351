//! Storage layer
//!
//! One fixed key, one opaque blob: the entire `{users, rumors}` state is
//! serialized as a single snapshot record in a SQLite key-value table.

pub mod error;
pub mod snapshot;

pub use error::{StorageError, StorageResult};
pub use snapshot::{SnapshotStore, SNAPSHOT_KEY};
