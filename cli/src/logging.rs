//! Logging configuration for the CLI.
//!
//! Stdout-only: INFO+ by default, DEBUG+ for dossier crates when
//! `DEBUG_LOGGING=1` is set. `RUST_LOG` overrides both.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init() {
    let default_filter = if std::env::var("DEBUG_LOGGING").is_ok() {
        "info,dossier_core=debug,dossier_cli=debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
