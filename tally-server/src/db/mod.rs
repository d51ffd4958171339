//! PostgreSQL access layer
//!
//! Connection pooling, schema bootstrap, and the ledger repository.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{AcceptOutcome, DbError, InsertOutcome, LedgerRepo};
