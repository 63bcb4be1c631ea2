//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading `NavUiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors emitted while loading a route fixture.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FixtureError {
    #[error("failed to read route {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid route document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("route has no legs")]
    EmptyRoute,
    #[error("position leg {leg_index} step {step_index} is outside the route")]
    PositionOutOfRange { leg_index: usize, step_index: usize },
}
