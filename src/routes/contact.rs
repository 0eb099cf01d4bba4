use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use riviera_inquiry::InquiryRequest;
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

/// POST /api/contact - Email a property inquiry to the brokerage
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<InquiryRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;

    app_state.delivery.deliver(&request).await?;

    Ok(Json(json!({ "message": "Email sent successfully" })))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
