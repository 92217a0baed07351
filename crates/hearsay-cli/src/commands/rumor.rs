//! Rumor command handlers

use anyhow::{bail, Result};

use hearsay_core::{Store, Vote};

use crate::output::Output;

/// Post a new rumor as the active user
pub fn post(store: &mut Store, content: String, output: &Output) -> Result<()> {
    let Some(id) = store.post(&content, None) else {
        bail!("Rumor content cannot be empty");
    };

    let posted = store
        .rumor(&id)
        .ok_or_else(|| anyhow::anyhow!("Posted rumor not found: {}", id))?;
    output.print_rumor(store, posted);
    Ok(())
}

/// Cast the active user's vote on a rumor
pub fn vote(store: &mut Store, rumor_id: String, vote: Vote, output: &Output) -> Result<()> {
    let Some(before) = store.rumor(&rumor_id).cloned() else {
        bail!("Rumor not found: {}", rumor_id);
    };
    if !before.is_active() {
        bail!("Rumor {} is already {}", rumor_id, before.status);
    }

    store.vote(&rumor_id, vote);

    if let Some(after) = store.rumor(&rumor_id) {
        output.print_rumor(store, after);
    }
    Ok(())
}

/// Delete a rumor by id
pub fn delete(store: &mut Store, rumor_id: String, output: &Output) -> Result<()> {
    if store.rumor(&rumor_id).is_none() {
        bail!("Rumor not found: {}", rumor_id);
    }

    store.delete(&rumor_id);
    output.success(&format!("Deleted rumor: {}", rumor_id));
    Ok(())
}
