//! Process-lifetime memoization of the loaded dataset.
//!
//! Interactions never re-read the CSV; the cache hands out the same
//! `Arc<Dataset>` until something calls [`DatasetCache::invalidate`]
//! (normally the file watcher, when the CSV changes on disk).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::{DataLoadError, Dataset, load_dataset};

pub struct DatasetCache {
    path: PathBuf,
    loaded: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached dataset, loading it on first use.
    pub async fn get(&self) -> Result<Arc<Dataset>, DataLoadError> {
        // Fast path: already loaded (read lock only)
        {
            if let Some(dataset) = self.loaded.read().await.as_ref() {
                return Ok(Arc::clone(dataset));
            }
        }

        let mut slot = self.loaded.write().await;
        // Double-check after acquiring write lock
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_dataset(&self.path)?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the cached dataset; the next `get` re-reads the file.
    pub async fn invalidate(&self) {
        debug!(path = %self.path.display(), "invalidating dataset cache");
        *self.loaded.write().await = None;
    }
}
