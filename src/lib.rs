pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;

pub use error::GymFlowError;
pub use service::credentials::{AccountStore, AuthOutcome, CredentialManager};
