//! Wires the dataset file watcher to cache invalidation.
//!
//! The dataset is cached for the life of the process; this task is the one
//! thing that drops the cache, when the CSV actually changes on disk. The
//! next interaction reloads lazily.

use std::path::Path;
use std::sync::Arc;

use dossier_core::dataset::DatasetCache;
use dossier_core::dataset::watcher::{DatasetEvent, DatasetWatcher};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Start watching the dataset file behind the given cache. Returns `None`
/// (with a warning) if the watcher cannot be created; the dashboard still
/// works, it just won't notice external edits.
pub fn init_watcher(path: &Path, cache: Arc<DatasetCache>) -> Option<JoinHandle<()>> {
    let mut watcher = match DatasetWatcher::new(path) {
        Ok(watcher) => watcher,
        Err(e) => {
            warn!("failed to watch dataset file: {e}");
            return None;
        }
    };

    Some(tokio::spawn(async move {
        while let Some(event) = watcher.next_event().await {
            match event {
                DatasetEvent::Changed => {
                    info!("dataset file changed, invalidating cache");
                    cache.invalidate().await;
                }
                DatasetEvent::Removed => {
                    warn!("dataset file removed; next reload will fail");
                    cache.invalidate().await;
                }
                DatasetEvent::Error(msg) => warn!("{msg}"),
            }
        }
    }))
}
