//! Synthetic rumor generator
//!
//! Periodically posts a random gossip line attributed to a random roster
//! user, through the store's normal post operation. The returned handle
//! aborts its task on `stop()` and on drop, so re-initialization replaces
//! a running generator instead of stacking timers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::seed::GOSSIP_LINES;
use crate::store::Store;

/// Post one synthetic rumor with a randomly chosen author
///
/// Returns the new rumor id, or `None` if the post was rejected.
pub fn post_synthetic(store: &mut Store) -> Option<String> {
    let mut rng = rand::thread_rng();
    let line = GOSSIP_LINES.choose(&mut rng)?;
    let author_id = store.users().choose(&mut rng).map(|u| u.id.clone());
    store.post(line, author_id.as_deref())
}

/// Handle to a running generator task
pub struct GeneratorHandle {
    task: JoinHandle<()>,
}

impl GeneratorHandle {
    /// Stop the generator
    pub fn stop(&self) {
        self.task.abort();
    }

    /// Whether the generator task has ended
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for GeneratorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a generator posting one synthetic rumor every `period`
pub fn spawn(store: Arc<Mutex<Store>>, period: Duration) -> GeneratorHandle {
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately; wait a full period instead
        interval.tick().await;
        loop {
            interval.tick().await;
            {
                let mut store = match store.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                if let Some(id) = post_synthetic(&mut store) {
                    debug!(rumor = %id, "auto-generated rumor");
                }
            }
        }
    });

    GeneratorHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_synthetic_uses_the_gossip_pool() {
        let mut store = Store::with_storage(None);
        let before = store.rumors().len();
        let total_points: i64 = store.users().iter().map(|u| u.points).sum();

        let id = post_synthetic(&mut store).unwrap();

        assert_eq!(store.rumors().len(), before + 1);
        let rumor = &store.rumors()[0];
        assert_eq!(rumor.id, id);
        assert!(GOSSIP_LINES.contains(&rumor.content.as_str()));
        assert!(store.users().iter().any(|u| u.id == rumor.author_id));

        // Some roster user collected the post reward
        let after: i64 = store.users().iter().map(|u| u.points).sum();
        assert_eq!(after, total_points + crate::store::POST_REWARD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generator_posts_on_a_timer() {
        let store = Arc::new(Mutex::new(Store::with_storage(None)));
        let before = store.lock().unwrap().rumors().len();

        let handle = spawn(Arc::clone(&store), Duration::from_secs(30));

        tokio::time::sleep(Duration::from_secs(95)).await;
        handle.stop();

        let after = store.lock().unwrap().rumors().len();
        assert_eq!(after, before + 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_generator_posts_nothing_more() {
        let store = Arc::new(Mutex::new(Store::with_storage(None)));

        let handle = spawn(Arc::clone(&store), Duration::from_secs(30));
        tokio::time::sleep(Duration::from_secs(35)).await;
        handle.stop();

        let frozen = store.lock().unwrap().rumors().len();
        tokio::time::sleep(Duration::from_secs(120)).await;

        assert_eq!(store.lock().unwrap().rumors().len(), frozen);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_handle_aborts_the_task() {
        let store = Arc::new(Mutex::new(Store::with_storage(None)));

        {
            let _handle = spawn(Arc::clone(&store), Duration::from_secs(30));
        }

        let frozen = store.lock().unwrap().rumors().len();
        tokio::time::sleep(Duration::from_secs(120)).await;

        assert_eq!(store.lock().unwrap().rumors().len(), frozen);
    }
}
