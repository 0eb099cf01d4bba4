use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use riviera_inquiry::DeliveryService;

use crate::error::AppError;

mod contact;
mod health;
mod legal;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub delivery: DeliveryService,
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    let body_limit = app_state.config.server.body_limit;

    Router::new()
        .route("/health", get(health::health))
        .route("/privacy", get(legal::privacy))
        .route("/cookies", get(legal::cookies))
        .route(
            crate::client::CONTACT_PATH,
            post(contact::action).fallback(contact::method_not_allowed),
        )
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(app_state)
}
