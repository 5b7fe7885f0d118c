use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record store could not be opened at all. Distinct from
    /// [`ScoutError::QueryFailed`] and from an empty result, which is a
    /// successful outcome.
    #[error("Record store unavailable at {}: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        source: anyhow::Error,
    },

    /// A query against an open store failed mid-execution.
    #[error("Query failed: {source}")]
    QueryFailed { source: anyhow::Error },

    #[error("Search term must not be empty")]
    EmptyTerm,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<config::ConfigError> for ScoutError {
    #[inline]
    fn from(e: config::ConfigError) -> Self {
        ScoutError::Config(e.to_string())
    }
}

pub mod commands;
pub mod config;
pub mod render;
pub mod store;
