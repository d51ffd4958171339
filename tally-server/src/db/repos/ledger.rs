//! Ledger repository
//!
//! The ledger is an insert-only set of accepted numbers. Acceptance runs as
//! check-then-insert inside a single transaction; the existence checks are
//! advisory under concurrency, and the primary-key constraint is the final
//! arbiter when two submissions race on the same value.

use sqlx::PgPool;

use crate::models::Candidate;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result of a plain insert attempt.
///
/// A unique-constraint violation is an expected outcome (a concurrent
/// submission won the race), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    DuplicateKey,
}

/// Result of the full acceptance sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The candidate was recorded; `next` is the successor to report.
    Accepted { next: i64 },

    /// `value` (the candidate, or its predecessor) is already recorded.
    Duplicate { value: i64 },
}

/// Ledger repository
pub struct LedgerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LedgerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The maximum accepted number, or -1 when the ledger is empty.
    pub async fn max_accepted(&self) -> Result<i64, DbError> {
        let max: (Option<i64>,) = sqlx::query_as("SELECT MAX(number) FROM numbers")
            .fetch_one(self.pool)
            .await?;

        Ok(max.0.unwrap_or(-1))
    }

    /// Whether `n` is already recorded.
    pub async fn exists(&self, n: i64) -> Result<bool, DbError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM numbers WHERE number = $1)")
                .bind(n)
                .fetch_one(self.pool)
                .await?;

        Ok(exists.0)
    }

    /// Insert `n`, reporting a unique violation as an outcome rather than
    /// an error.
    pub async fn insert(&self, n: i64) -> Result<InsertOutcome, DbError> {
        match sqlx::query("INSERT INTO numbers (number) VALUES ($1)")
            .bind(n)
            .execute(self.pool)
            .await
        {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Ok(InsertOutcome::DuplicateKey)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Run the acceptance sequence for a validated candidate.
    ///
    /// Checks the candidate, then its predecessor, then inserts; the first
    /// recorded value found decides the rejection. All three statements run
    /// on one transaction, committed only after a successful insert; every
    /// early return drops the transaction and rolls back.
    pub async fn accept(&self, candidate: Candidate) -> Result<AcceptOutcome, DbError> {
        let n = candidate.value();
        let mut tx = self.pool.begin().await?;

        let (taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM numbers WHERE number = $1)")
                .bind(n)
                .fetch_one(&mut *tx)
                .await?;
        if taken {
            return Ok(AcceptOutcome::Duplicate { value: n });
        }

        let (predecessor_taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM numbers WHERE number = $1)")
                .bind(candidate.predecessor())
                .fetch_one(&mut *tx)
                .await?;
        if predecessor_taken {
            return Ok(AcceptOutcome::Duplicate {
                value: candidate.predecessor(),
            });
        }

        match sqlx::query("INSERT INTO numbers (number) VALUES ($1)")
            .bind(n)
            .execute(&mut *tx)
            .await
        {
            Ok(_) => {
                tx.commit().await?;
                Ok(AcceptOutcome::Accepted {
                    next: candidate.successor(),
                })
            }
            // Lost the race against a concurrent insert of the same value
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Ok(AcceptOutcome::Duplicate { value: n })
            }
            Err(e) => Err(e.into()),
        }
    }
}
