//! Signup and login over an injected [`AccountStore`].
//!
//! Passwords are stored as the lowercase hex SHA-256 of their string form,
//! with no per-record salt. Signup never checks for an existing username, so
//! repeated signups leave several rows and login only ever sees the oldest.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::db::models::Account;
use crate::error::GymFlowError;

/// Persistent account records, matched exactly on `username`.
pub trait AccountStore: Send + Sync {
    /// Append a record unconditionally.
    fn insert(&self, account: Account) -> impl Future<Output = Result<(), GymFlowError>> + Send;

    /// First record stored under `username`, if any.
    fn find_one(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<Account>, GymFlowError>> + Send;
}

/// Password as submitted: JSON strings and numbers are both accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Password {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Password::Text(s) => f.write_str(s),
            Password::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Password::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthOutcome {
    AuthSuccess,
    InvalidPassword,
    UserNotFound,
}

impl AuthOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            AuthOutcome::AuthSuccess => "Login successful",
            AuthOutcome::InvalidPassword => "Invalid password",
            AuthOutcome::UserNotFound => "User not found",
        }
    }
}

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

/// Hex-encoded SHA-256 digest, always 64 characters.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[derive(Clone)]
pub struct CredentialManager<S> {
    store: S,
}

impl<S: AccountStore> CredentialManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn register(&self, username: &str, password: &Password) -> Result<(), GymFlowError> {
        let account = Account {
            username: username.to_string(),
            password_hash: hash_password(&password.to_string()),
        };
        self.store.insert(account).await?;
        info!(username = %username, "account registered");
        Ok(())
    }

    pub async fn authenticate(
        &self,
        username: &str,
        password: &Password,
    ) -> Result<AuthOutcome, GymFlowError> {
        let Some(account) = self.store.find_one(username).await? else {
            debug!(username = %username, "login for unknown user");
            return Ok(AuthOutcome::UserNotFound);
        };

        let outcome = if account.password_hash == hash_password(&password.to_string()) {
            AuthOutcome::AuthSuccess
        } else {
            AuthOutcome::InvalidPassword
        };
        debug!(username = %username, outcome = ?outcome, "login checked");
        Ok(outcome)
    }
}
