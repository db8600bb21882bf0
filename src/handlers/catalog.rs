use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::service::catalog;
use crate::{GymFlowError, router::GymFlowState};

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

pub async fn find_exercise_handler(
    State(state): State<GymFlowState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Value>, GymFlowError> {
    let Query(query) = query?;
    Ok(Json(catalog::find_exercise(&state.store, &query.name).await?))
}

pub async fn get_cards_handler(
    State(state): State<GymFlowState>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, GymFlowError> {
    let Query(page) = page?;
    let cards = catalog::exercise_cards(&state.store, page.skip, page.limit).await?;
    Ok(Json(json!({ "exercises": cards })))
}

pub async fn get_foods_handler(
    State(state): State<GymFlowState>,
) -> Result<Json<Value>, GymFlowError> {
    let foods = catalog::list_foods(&state.store).await?;
    Ok(Json(json!({ "foods": foods })))
}

pub async fn find_food_handler(
    State(state): State<GymFlowState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Value>, GymFlowError> {
    let Query(query) = query?;
    Ok(Json(catalog::find_food(&state.store, &query.name).await?))
}
