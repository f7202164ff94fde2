use std::path::PathBuf;

use prng_engines::{RangeError, RenderError, SamplingError};
use thiserror::Error;

/// Errors that can stop a demo run
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Sampling(#[from] SamplingError),

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Range(#[from] RangeError),

    #[error("Unknown engine '{0}'")]
    UnknownEngine(String),

    #[error("OS entropy unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
