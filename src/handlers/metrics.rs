use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::GymFlowError;
use crate::service::body_metrics::{self, BodyMetrics};

#[derive(Debug, Deserialize)]
pub struct BmiQuery {
    pub weight: f64,
    pub height: f64,
    pub age: i32,
    pub gender: String,
}

/// GET / liveness greeting.
pub async fn greet_handler() -> Json<Value> {
    Json(json!({ "message": "Hello bro, it's working!" }))
}

pub async fn calculate_bmi_handler(
    query: Result<Query<BmiQuery>, QueryRejection>,
) -> Result<Json<BodyMetrics>, GymFlowError> {
    let Query(q) = query?;
    Ok(Json(body_metrics::calculate(
        q.weight, q.height, q.age, &q.gender,
    )?))
}
