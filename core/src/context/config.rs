//! Application configuration
//!
//! The serializable shape lives in dossier-types; this module provides the
//! platform default for the dataset location and confy persistence.

use tracing::warn;

pub use dossier_types::AppConfig;

const APP_NAME: &str = "dossier";
const CONFIG_NAME: &str = "config";

/// Default dataset location: `<data dir>/dossier/films.csv`
/// (`~/.local/share/dossier/films.csv` on Linux).
pub fn default_dataset_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("dossier/films.csv"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "films.csv".to_string())
}

/// Extension trait for AppConfig persistence
pub trait AppConfigExt {
    fn load() -> Self;
    fn save(&self) -> Result<(), confy::ConfyError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        match confy::load::<AppConfig>(APP_NAME, CONFIG_NAME) {
            Ok(config) if config.dataset_path.is_empty() => {
                AppConfig::with_dataset_path(default_dataset_path())
            }
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config, using defaults: {e}");
                AppConfig::with_dataset_path(default_dataset_path())
            }
        }
    }

    fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }
}
