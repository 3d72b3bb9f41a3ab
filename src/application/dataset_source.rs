// Source trait for the one-time dataset load
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::record::Table;

/// The remote fetch or parse failed. Fatal: there is no retry and no
/// fallback, and the process must not proceed to serve.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("dataset fetch returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse dataset CSV: {0}")]
    Parse(#[from] csv::Error),
}

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse the remote dataset into an in-memory table.
    /// Called exactly once, at startup; the table is read-only afterwards.
    async fn load(&self) -> Result<Table, LoadError>;
}
