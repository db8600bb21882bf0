use axum::{
    Router,
    routing::{get, post},
};

use crate::db::SqliteStore;
use crate::handlers::{accounts, catalog, metrics};
use crate::service::credentials::CredentialManager;

#[derive(Clone)]
pub struct GymFlowState {
    pub store: SqliteStore,
    pub credentials: CredentialManager<SqliteStore>,
}

impl GymFlowState {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            credentials: CredentialManager::new(store.clone()),
            store,
        }
    }
}

pub fn gymflow_router(state: GymFlowState) -> Router {
    Router::new()
        .route("/", get(metrics::greet_handler))
        .route("/calculate_bmi", get(metrics::calculate_bmi_handler))
        .route("/find_exercise", get(catalog::find_exercise_handler))
        .route("/get_cards", get(catalog::get_cards_handler))
        .route("/get_foods", get(catalog::get_foods_handler))
        .route("/find_food", get(catalog::find_food_handler))
        .route("/signup", post(accounts::signup_handler))
        .route("/login", post(accounts::login_handler))
        .with_state(state)
}
