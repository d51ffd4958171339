//! Schema bootstrap for the numbers ledger
//!
//! `run` is idempotent: CREATE TABLE IF NOT EXISTS leaves an existing table
//! and its rows untouched, so it executes unconditionally on every startup.

use sqlx::PgPool;

use super::repos::DbError;

/// Create the numbers table if absent.
///
/// The primary key doubles as the uniqueness arbiter for concurrent
/// submissions of the same value; the check constraint keeps negative
/// values out of the ledger at the storage level too.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running ledger migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS numbers (
            number BIGINT PRIMARY KEY CHECK (number >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
