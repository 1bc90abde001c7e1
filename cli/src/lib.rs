pub mod commands;
pub mod context;
pub mod data_watcher;
pub mod logging;
pub mod repl;
pub mod vega;

pub use context::CliContext;
pub use repl::readline;
