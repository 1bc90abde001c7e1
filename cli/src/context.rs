use std::sync::Arc;

use dossier_core::context::AppConfigExt;
use dossier_core::dataset::DatasetCache;
use dossier_core::{AppConfig, DashboardSession};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Background work owned by the CLI (currently just the dataset watcher).
#[derive(Default)]
pub struct BackgroundTasks {
    pub watcher: Option<JoinHandle<()>>,
}

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the core types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    /// Memoized dataset for the configured path. None until first `load`.
    cache: Arc<RwLock<Option<Arc<DatasetCache>>>>,
    /// The active dashboard session. None until a dataset is loaded.
    session: Arc<RwLock<Option<DashboardSession>>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::load())),
            cache: Arc::new(RwLock::new(None)),
            session: Arc::new(RwLock::new(None)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }

    pub async fn set_cache(&self, cache: Arc<DatasetCache>) {
        *self.cache.write().await = Some(cache);
    }

    pub async fn cache(&self) -> Option<Arc<DatasetCache>> {
        self.cache.read().await.clone()
    }

    pub async fn set_session(&self, session: DashboardSession) {
        *self.session.write().await = Some(session);
    }

    /// Re-fetch the dataset through the cache and hand it to the session.
    /// After the watcher invalidates the cache this is where the reload
    /// actually happens; with a warm cache it is a pointer compare.
    pub async fn sync_session(&self) -> Result<(), String> {
        let Some(cache) = self.cache().await else {
            return Ok(());
        };
        let dataset = cache.get().await.map_err(|e| e.to_string())?;
        if let Some(session) = self.session.write().await.as_mut()
            && session.sync_dataset(dataset)
        {
            println!("Dataset changed on disk; reloaded");
        }
        Ok(())
    }

    /// Run a closure over the active session, or report that none exists.
    pub async fn with_session<T>(
        &self,
        f: impl FnOnce(&DashboardSession) -> T,
    ) -> Result<T, String> {
        let guard = self.session.read().await;
        guard
            .as_ref()
            .map(f)
            .ok_or_else(|| "no dataset loaded - run `load` first".to_string())
    }

    /// Like `with_session` but mutable, for filter changes.
    pub async fn with_session_mut<T>(
        &self,
        f: impl FnOnce(&mut DashboardSession) -> T,
    ) -> Result<T, String> {
        let mut guard = self.session.write().await;
        guard
            .as_mut()
            .map(f)
            .ok_or_else(|| "no dataset loaded - run `load` first".to_string())
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
