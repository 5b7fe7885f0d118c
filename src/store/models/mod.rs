use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalogued RFC entry. Numbers are assigned when the store is built
/// and are never reused; summaries may be empty but are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RfcRecord {
    pub number: i64,
    pub summary: String,
}
