//! Filesystem watcher for the dataset CSV.
//!
//! The dataset is cached for the life of the process; the only thing that
//! should invalidate it is the file actually changing on disk. The watcher
//! observes the CSV's parent directory (editors replace files rather than
//! write in place) and reports events for the dataset path.

use std::path::{Path, PathBuf};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{self, Receiver};

pub enum DatasetEvent {
    /// The dataset file was created, replaced, or modified.
    Changed,
    /// The dataset file was removed; the next reload will fail loudly.
    Removed,
    Error(String),
}

pub struct DatasetWatcher {
    _watcher: RecommendedWatcher,
    dataset_path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
}

impl DatasetWatcher {
    pub fn new(dataset_path: &Path) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel(100);

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.blocking_send(res);
            },
            Config::default(),
        )?;

        let watch_root = dataset_path.parent().unwrap_or(Path::new("."));
        watcher.watch(watch_root, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            dataset_path: dataset_path.to_path_buf(),
            rx,
        })
    }

    /// Next event concerning the dataset file. Events for sibling files in
    /// the watched directory are skipped.
    pub async fn next_event(&mut self) -> Option<DatasetEvent> {
        while let Some(event_result) = self.rx.recv().await {
            match event_result {
                Ok(event) => {
                    if let Some(dataset_event) = self.process_event(event) {
                        return Some(dataset_event);
                    }
                }
                Err(e) => {
                    return Some(DatasetEvent::Error(format!("dataset watcher error: {e}")));
                }
            }
        }
        None
    }

    fn process_event(&self, event: Event) -> Option<DatasetEvent> {
        if !event.paths.iter().any(|p| p == &self.dataset_path) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) | EventKind::Modify(_) => Some(DatasetEvent::Changed),
            EventKind::Remove(_) => Some(DatasetEvent::Removed),
            _ => None,
        }
    }
}
