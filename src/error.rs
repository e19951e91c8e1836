//! Error types. Input-shape problems never surface here: extraction and
//! explanation are total. Only artifact and internal classifier faults do.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact {path} could not be read: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid model: {0}")]
    Invalid(String),
    #[error("representation has {got} features, model expects {expected}")]
    FeatureMismatch { expected: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path} could not be read: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Request-level failure. Malformed input is never one of these.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("classifier fault: {0}")]
    Model(#[from] ModelError),
}
