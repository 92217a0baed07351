//! Data models for Hearsay
//!
//! Defines the core data structures: User, Rumor, and the persisted State
//! record that bundles both collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A participant in the rumor feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Reputation balance; signed, may go negative
    pub points: i64,
    /// Reward names owned by this user (duplicates allowed)
    pub vouchers: Vec<String>,
}

impl User {
    /// Create a new user with no vouchers
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            vouchers: Vec::new(),
        }
    }
}

/// A single standing vote on a rumor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    True,
    False,
}

/// Lifecycle state of a rumor
///
/// Transitions only move forward: `Active` to `Verified` or `Debunked`.
/// A decided rumor is never re-activated or re-decided.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RumorStatus {
    Active,
    Verified,
    Debunked,
}

impl std::fmt::Display for RumorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RumorStatus::Active => write!(f, "active"),
            RumorStatus::Verified => write!(f, "verified"),
            RumorStatus::Debunked => write!(f, "debunked"),
        }
    }
}

/// A posted claim with its vote tallies and verdict
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rumor {
    /// Unique identifier, generated at creation
    pub id: String,
    /// The claim text
    pub content: String,
    /// Id of the posting user; non-owning, may dangle
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "trueVotes")]
    pub true_votes: u32,
    #[serde(rename = "falseVotes")]
    pub false_votes: u32,
    pub status: RumorStatus,
    /// Each user's single standing vote, keyed by user id
    pub voters: BTreeMap<String, Vote>,
}

impl Rumor {
    /// Create a fresh active rumor with zero votes
    pub fn new(content: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            id: format!("r-{}", Uuid::new_v4()),
            content: content.into(),
            author_id: author_id.into(),
            true_votes: 0,
            false_votes: 0,
            status: RumorStatus::Active,
            voters: BTreeMap::new(),
        }
    }

    /// Total votes cast so far
    pub fn total_votes(&self) -> u32 {
        self.true_votes + self.false_votes
    }

    /// Whether this rumor can still accept votes
    pub fn is_active(&self) -> bool {
        self.status == RumorStatus::Active
    }
}

/// The full persisted record: both collections, nothing else
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    pub users: Vec<User>,
    pub rumors: Vec<Rumor>,
}
