use super::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

async fn create_test_pool() -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("rfc_index.db");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&db_path)
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test pool");

    sqlx::query("CREATE TABLE rfc_index (rfc_number INTEGER PRIMARY KEY, rfc_info TEXT NOT NULL)")
        .execute(&pool)
        .await
        .expect("Failed to create schema");

    (temp_dir, pool)
}

async fn insert_record(pool: &SqlitePool, number: i64, summary: &str) {
    sqlx::query("INSERT INTO rfc_index (rfc_number, rfc_info) VALUES (?, ?)")
        .bind(number)
        .bind(summary)
        .execute(pool)
        .await
        .expect("Failed to insert record");
}

#[tokio::test]
async fn substring_match_is_case_insensitive() {
    let (_temp_dir, pool) = create_test_pool().await;

    insert_record(&pool, 7821, "Hello World RFC").await;
    insert_record(&pool, 42, "Networking basics").await;

    for term in ["hello", "HELLO", "Hello"] {
        let records = RecordQueries::search_summary(&pool, term)
            .await
            .expect("Search should succeed");
        assert_eq!(
            records,
            vec![RfcRecord {
                number: 7821,
                summary: "Hello World RFC".to_string(),
            }],
            "term {term:?} should match only the Hello World record"
        );
    }
}

#[tokio::test]
async fn no_matches_is_empty_not_error() {
    let (_temp_dir, pool) = create_test_pool().await;

    insert_record(&pool, 7821, "Hello World RFC").await;
    insert_record(&pool, 42, "Networking basics").await;

    let records = RecordQueries::search_summary(&pool, "xyz")
        .await
        .expect("Search with no matches should still succeed");
    assert!(records.is_empty());
}

#[tokio::test]
async fn matches_are_complete_and_unique() {
    let (_temp_dir, pool) = create_test_pool().await;

    insert_record(&pool, 1, "Host software").await;
    insert_record(&pool, 2, "Host behavior notes").await;
    insert_record(&pool, 3, "Unrelated entry").await;

    let records = RecordQueries::search_summary(&pool, "host")
        .await
        .expect("Search should succeed");

    let numbers: Vec<i64> = records.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn results_keep_insertion_order_and_are_idempotent() {
    let (_temp_dir, pool) = create_test_pool().await;

    // Inserted out of numeric order; insertion order is what must hold.
    insert_record(&pool, 90, "transport protocol notes").await;
    insert_record(&pool, 10, "another protocol entry").await;
    insert_record(&pool, 50, "protocol appendix").await;

    let first = RecordQueries::search_summary(&pool, "protocol")
        .await
        .expect("Search should succeed");
    let second = RecordQueries::search_summary(&pool, "protocol")
        .await
        .expect("Search should succeed");

    let numbers: Vec<i64> = first.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![90, 10, 50]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn like_wildcards_in_term_match_literally() {
    let (_temp_dir, pool) = create_test_pool().await;

    insert_record(&pool, 1, "Throughput improved 50% overall").await;
    insert_record(&pool, 2, "Throughput improved 50 points overall").await;
    insert_record(&pool, 3, "snake_case identifiers").await;
    insert_record(&pool, 4, "snakeXcase identifiers").await;

    let records = RecordQueries::search_summary(&pool, "50%")
        .await
        .expect("Search should succeed");
    let numbers: Vec<i64> = records.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1]);

    let records = RecordQueries::search_summary(&pool, "snake_case")
        .await
        .expect("Search should succeed");
    let numbers: Vec<i64> = records.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![3]);
}

#[tokio::test]
async fn empty_summaries_are_allowed() {
    let (_temp_dir, pool) = create_test_pool().await;

    insert_record(&pool, 1, "").await;
    insert_record(&pool, 2, "something").await;

    let records = RecordQueries::search_summary(&pool, "something")
        .await
        .expect("Search should succeed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].number, 2);
}

#[tokio::test]
async fn missing_table_is_query_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("empty.db");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&db_path)
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test pool");

    let result = RecordQueries::search_summary(&pool, "anything").await;
    assert!(matches!(result, Err(ScoutError::QueryFailed { .. })));
}

#[tokio::test]
async fn count_records() {
    let (_temp_dir, pool) = create_test_pool().await;

    insert_record(&pool, 1, "one").await;
    insert_record(&pool, 2, "two").await;

    let count = RecordQueries::count(&pool)
        .await
        .expect("Count should succeed");
    assert_eq!(count, 2);
}

#[test]
fn escape_like_passthrough_and_metacharacters() {
    assert_eq!(escape_like("hello"), "hello");
    assert_eq!(escape_like("50%"), "50\\%");
    assert_eq!(escape_like("snake_case"), "snake\\_case");
    assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    assert_eq!(escape_like(""), "");
}
