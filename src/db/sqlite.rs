use std::str::FromStr;

use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::debug;

use crate::db::models::{Account, Collection};
use crate::db::schema::SQLITE_INIT;
use crate::error::GymFlowError;
use crate::service::credentials::AccountStore;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and apply the schema.
    pub async fn connect(database_url: &str) -> Result<Self, GymFlowError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // every connection to `:memory:` opens a fresh database, so pin exactly one
        let pool_opts = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_opts.connect_with(connect_opts).await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), GymFlowError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Append an account row. No uniqueness check.
    pub async fn insert_account(&self, account: &Account) -> Result<i64, GymFlowError> {
        let res = sqlx::query("INSERT INTO accounts (username, password_hash) VALUES (?, ?)")
            .bind(&account.username)
            .bind(&account.password_hash)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    /// Oldest account stored under `username`.
    pub async fn find_account(&self, username: &str) -> Result<Option<Account>, GymFlowError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT username, password_hash FROM accounts WHERE username = ? ORDER BY id LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    /// Batch insert using a single transaction. Returns the number of rows written.
    pub async fn insert_documents(
        &self,
        collection: Collection,
        docs: &[Value],
    ) -> Result<u64, GymFlowError> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for doc in docs {
            let body = serde_json::to_string(doc)?;
            sqlx::query("INSERT INTO documents (collection, body) VALUES (?, ?)")
                .bind(collection.as_str())
                .bind(body)
                .execute(&mut *tx)
                .await?;
            written += 1;
        }

        tx.commit().await?;
        debug!(collection = collection.as_str(), written, "documents inserted");
        Ok(written)
    }

    /// First document (in insertion order) whose top-level `field` equals `value`.
    pub async fn find_document(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, GymFlowError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"SELECT body FROM documents
               WHERE collection = ? AND json_extract(body, ?) = ?
               ORDER BY id LIMIT 1"#,
        )
        .bind(collection.as_str())
        .bind(json_path(field))
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(body,)| serde_json::from_str(&body))
            .transpose()
            .map_err(GymFlowError::from)
    }

    /// At most `limit` documents in insertion order after skipping `skip`.
    pub async fn list_documents(
        &self,
        collection: Collection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Value>, GymFlowError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"SELECT body FROM documents
               WHERE collection = ?
               ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(collection.as_str())
        .bind(clamp_i64(limit))
        .bind(clamp_i64(skip))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(body,)| serde_json::from_str(&body).map_err(GymFlowError::from))
            .collect()
    }
}

impl AccountStore for SqliteStore {
    async fn insert(&self, account: Account) -> Result<(), GymFlowError> {
        self.insert_account(&account).await.map(|_| ())
    }

    async fn find_one(&self, username: &str) -> Result<Option<Account>, GymFlowError> {
        self.find_account(username).await
    }
}

fn json_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', "\\\""))
}

fn clamp_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
