//! `stockline` command-line entry point: configuration, catalog loading and
//! command-script replay.

pub mod config;
pub mod script;

pub use config::{Config, ScriptSource};
pub use script::{ReplaySummary, ScriptCommand, load_catalog, replay};
