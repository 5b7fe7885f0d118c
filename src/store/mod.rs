use anyhow::anyhow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::debug;

use crate::{Result, ScoutError};


pub mod models;
pub mod queries;

pub use models::RfcRecord;
use queries::RecordQueries;

pub type DbPool = Pool<Sqlite>;

/// Handle to the record store. The store is built externally and is strictly
/// read-only here; opening never creates the file.
#[derive(Debug, Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Opens the record store at `path`. A missing or unopenable file is
    /// reported as [`ScoutError::StoreUnavailable`], never papered over with
    /// a fresh empty database.
    #[inline]
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ScoutError::StoreUnavailable {
                path: path.to_path_buf(),
                source: anyhow!("no such file"),
            });
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| ScoutError::StoreUnavailable {
                path: path.to_path_buf(),
                source: anyhow::Error::new(e),
            })?;

        debug!("Opened record store at {}", path.display());
        Ok(Self { pool })
    }

    #[inline]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Releases the store connection. Dropping the pool would close it
    /// eventually; closing explicitly keeps the release inside the call
    /// that acquired it.
    #[inline]
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Runs one scoped search against the store at `path`: acquire, query,
/// release. An empty result is a successful outcome, reported distinctly
/// from any failure to open or scan the store.
#[inline]
pub async fn search<P: AsRef<Path>>(path: P, term: &str) -> Result<Vec<RfcRecord>> {
    let store = Store::open(path).await?;
    let result = RecordQueries::search_summary(store.pool(), term).await;
    store.close().await;
    result
}

/// Counts records in the store with the same scoped acquire/release cycle,
/// for diagnostics.
#[inline]
pub async fn count<P: AsRef<Path>>(path: P) -> Result<i64> {
    let store = Store::open(path).await?;
    let result = RecordQueries::count(store.pool()).await;
    store.close().await;
    result
}
