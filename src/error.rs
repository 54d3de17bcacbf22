//! Errors for the fallible edges of the crate.
//!
//! The controller itself never fails: every missing precondition is a silent
//! no-op. Only loading configuration and shutting down a threaded controller
//! can report an error.

use std::path::PathBuf;

/// Errors that can occur while loading feature configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors reported when stopping a controller actor.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("Controller thread is no longer running")]
    Disconnected,

    #[error("Controller thread panicked")]
    Panicked,
}
