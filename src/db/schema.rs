//! SQL DDL for initializing the GymFlow store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `accounts`: one row per signup. `username` is indexed but NOT unique,
///   so repeated signups for one name are all kept.
/// - `documents`: schemaless JSON bodies grouped by collection name
///   (`exercises`, `foods`). `id` preserves insertion order.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    password_hash TEXT NOT NULL -- hex SHA-256, unsalted
);

CREATE INDEX IF NOT EXISTS idx_accounts_username ON accounts(username);

CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    collection TEXT NOT NULL,
    body TEXT NOT NULL -- JSON object
);

CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection);
"#;
