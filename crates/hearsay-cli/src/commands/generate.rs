//! Generate command handler

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};

use hearsay_core::{generator, Store};

use crate::output::Output;

/// Run the synthetic-rumor generator until `count` rumors are posted
pub async fn run(store: Store, period_secs: u64, count: usize, output: &Output) -> Result<()> {
    let target = store.rumors().len() + count;
    let store = Arc::new(Mutex::new(store));
    let handle = generator::spawn(Arc::clone(&store), Duration::from_secs(period_secs));

    loop {
        tokio::time::sleep(Duration::from_millis(200)).await;
        let guard = store
            .lock()
            .map_err(|_| anyhow!("generator poisoned the store lock"))?;
        if guard.rumors().len() >= target {
            break;
        }
    }
    handle.stop();

    let guard = store
        .lock()
        .map_err(|_| anyhow!("generator poisoned the store lock"))?;
    output.success(&format!("Generated {} rumor(s)", count));
    output.print_feed(&guard);
    Ok(())
}
