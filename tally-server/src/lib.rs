//! tally-server: HTTP service for a ledger of accepted integers
//!
//! A submitted number is accepted when neither it nor its immediate
//! predecessor has been recorded; accepted numbers are appended to a
//! PostgreSQL-backed ledger and the successor value is returned.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use http::{run_server, ServerConfig};
