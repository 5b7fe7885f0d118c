#[cfg(test)]
mod tests;

use sqlx::SqlitePool;
use tracing::debug;

use super::models::RfcRecord;
use crate::{Result, ScoutError};

/// Escapes LIKE pattern metacharacters so a user term containing `%` or `_`
/// matches those characters literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct RecordQueries;

impl RecordQueries {
    /// Case-insensitive substring match over record summaries.
    ///
    /// Results come back in the store's insertion order (rowid), so repeated
    /// identical searches against an unmodified store return identical
    /// sequences. No matches is `Ok` with an empty vec, never an error and
    /// never a fabricated placeholder row.
    #[inline]
    pub async fn search_summary(pool: &SqlitePool, term: &str) -> Result<Vec<RfcRecord>> {
        let pattern = format!("%{}%", escape_like(term));

        let records = sqlx::query_as::<_, RfcRecord>(
            r#"
            SELECT rfc_number AS number,
                   rfc_info AS summary
            FROM rfc_index
            WHERE rfc_info LIKE ? ESCAPE '\'
            ORDER BY rowid
            "#,
        )
        .bind(&pattern)
        .fetch_all(pool)
        .await
        .map_err(|e| ScoutError::QueryFailed {
            source: anyhow::Error::new(e),
        })?;

        debug!("Search for {:?} matched {} records", term, records.len());
        Ok(records)
    }

    #[inline]
    pub async fn count(pool: &SqlitePool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rfc_index")
            .fetch_one(pool)
            .await
            .map_err(|e| ScoutError::QueryFailed {
                source: anyhow::Error::new(e),
            })
    }
}
