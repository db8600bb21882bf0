use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::service::credentials::{AuthOutcome, Password, REGISTERED_MESSAGE};
use crate::{GymFlowError, router::GymFlowState};

#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub user: String,
    pub password: Password,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub outcome: AuthOutcome,
}

/// POST /signup
pub async fn signup_handler(
    State(state): State<GymFlowState>,
    payload: Result<Json<CredentialsPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, GymFlowError> {
    let Json(payload) = payload?;
    state
        .credentials
        .register(&payload.user, &payload.password)
        .await?;
    Ok(Json(MessageResponse {
        message: REGISTERED_MESSAGE,
    }))
}

/// POST /login -> 200 for every outcome; `outcome` tells them apart.
pub async fn login_handler(
    State(state): State<GymFlowState>,
    payload: Result<Json<CredentialsPayload>, JsonRejection>,
) -> Result<Json<LoginResponse>, GymFlowError> {
    let Json(payload) = payload?;
    let outcome = state
        .credentials
        .authenticate(&payload.user, &payload.password)
        .await?;
    Ok(Json(LoginResponse {
        message: outcome.message(),
        outcome,
    }))
}
