mod config;

pub use config::{AppConfigExt, default_dataset_path};
