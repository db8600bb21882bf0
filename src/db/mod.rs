//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: account rows and collection names
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool setup plus account and document queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Account, Collection};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, SqliteStore};
