//! Feed command handler

use anyhow::Result;

use hearsay_core::Store;

use crate::output::Output;

/// Print the rumor feed, most-recent-first
pub fn show(store: &Store, output: &Output) -> Result<()> {
    output.print_feed(store);
    Ok(())
}
