//! Redeem command handler

use anyhow::{bail, Result};

use hearsay_core::Store;

use crate::output::Output;

/// Spend the active user's points on a named reward
pub fn redeem(store: &mut Store, cost: i64, name: String, output: &Output) -> Result<()> {
    let points = store.current_user().points;

    if !store.redeem(cost, &name) {
        bail!(
            "Insufficient points: {} costs {}, you have {}",
            name,
            cost,
            points
        );
    }

    output.success(&format!(
        "Redeemed '{}' for {} points ({} remaining)",
        name,
        cost,
        store.current_user().points
    ));
    output.print_user(store.current_user());
    Ok(())
}
