//! Hearsay Core Library
//!
//! State engine for a local, single-session rumor feed: users post
//! unverified claims, vote them true or false, votes accumulate into a
//! verdict that settles the author's reputation, and reputation is
//! spendable on rewards.
//!
//! # Architecture
//!
//! - **Store**: single authoritative in-memory state plus every mutating
//!   business operation, with synchronous change notifications
//! - **SnapshotStore**: best-effort persistence of the full state as one
//!   opaque record in a SQLite key-value table
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open(&Config::load()?);
//!
//! let id = store.post("the cafeteria coffee is just reheated espresso", None);
//! store.vote(&id.unwrap(), Vote::False);
//! ```
//!
//! # Modules
//!
//! - `store`: the state engine (main entry point)
//! - `models`: users, rumors, votes, and the persisted state record
//! - `seed`: fixed first-run roster and feed
//! - `storage`: snapshot persistence
//! - `generator`: periodic synthetic-rumor task
//! - `config`: application configuration

pub mod config;
pub mod generator;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{Rumor, RumorStatus, State, User, Vote};
pub use storage::{SnapshotStore, StorageError};
pub use store::{Refresh, Store, SubscriptionId};
