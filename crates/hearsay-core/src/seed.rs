//! First-run seed data
//!
//! The roster is fixed: users are seeded once and mutated in place from then
//! on (points, vouchers), never created or deleted at runtime. The two seed
//! rumors carry legacy vote counts with empty voter maps; per-voter tracking
//! only applies to votes cast through the store.

use std::collections::BTreeMap;

use crate::models::{Rumor, RumorStatus, State, User};

/// The historical name of `u1`, migrated on load
pub const LEGACY_U1_NAME: &str = "GossipKing";

/// The current name of `u1`
pub const CURRENT_U1_NAME: &str = "skibidi";

/// Synthetic gossip lines used by the auto-generator
pub const GOSSIP_LINES: &[&str] = &[
    "My GPA is lower than my will to live right now.",
    "Saw the campus power couple fighting near the library. Breakup season?",
    "Pretty sure the hostel warden is running a fight club in the basement.",
    "My sleep schedule is so messed up I just wished the watchman 'Good Morning' at 3 AM.",
    "Heard someone is dating three people from the same friend group. Hazardous.",
    "Only thing verified about me is my attendance shortage.",
    "If I fail one more exam I'm selling my kidney. Bidding starts at $50.",
    "Saw someone crying in the bathroom. Wait, that was me in the mirror.",
    "Rumor has it the 'mysterious meat' in the mess today was actually pigeons.",
    "Confessed to my crush and she asked if it was a dare. Deleting myself.",
];

/// Build the fixed first-run state
pub fn initial_state() -> State {
    let mut secret_source = User::new("u2", "SecretSource", 350);
    secret_source.vouchers.push("Free Coffee".to_string());

    State {
        users: vec![
            User::new("u1", CURRENT_U1_NAME, 120),
            secret_source,
            User::new("u3", "TruthSeeker", 50),
        ],
        rumors: vec![
            Rumor {
                id: "r1".to_string(),
                content: "The new coffee shop on Main St. gives free pastries if you say \
                          \"Antigravity\"."
                    .to_string(),
                author_id: "u2".to_string(),
                true_votes: 12,
                false_votes: 3,
                status: RumorStatus::Active,
                voters: BTreeMap::new(),
            },
            Rumor {
                id: "r2".to_string(),
                content: "They are planning to replace the local park with a parking lot next \
                          month!"
                    .to_string(),
                author_id: "u3".to_string(),
                true_votes: 5,
                false_votes: 45,
                status: RumorStatus::Debunked,
                voters: BTreeMap::new(),
            },
        ],
    }
}
