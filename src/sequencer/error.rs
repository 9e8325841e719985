//! Build errors for the sequencer builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a sequencer.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration not specified. Call .config(config) before .build()")]
    MissingConfig,

    #[error("Host not specified. Call .host(host) before .build()")]
    MissingHost,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
