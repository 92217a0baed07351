//! User command handlers

use anyhow::Result;

use hearsay_core::Store;

use crate::output::Output;

/// Print the active user's id and name
pub fn whoami(store: &Store, output: &Output) -> Result<()> {
    let user = store.current_user();
    if output.is_quiet() {
        println!("{}", user.id);
    } else {
        println!("{} ({}) - {} pts", user.name, user.id, user.points);
    }
    Ok(())
}

/// Rotate to the next user in the roster
pub fn switch(store: &mut Store, output: &Output) -> Result<()> {
    store.switch_user();
    let user = store.current_user();
    output.success(&format!("Now acting as {} ({})", user.name, user.id));
    Ok(())
}

/// Print the active user's full profile
pub fn profile(store: &Store, output: &Output) -> Result<()> {
    output.print_user(store.current_user());
    Ok(())
}
