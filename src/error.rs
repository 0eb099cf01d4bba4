use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use riviera_inquiry::DeliveryError;
use serde_json::json;
use thiserror::Error;

pub const SEND_FAILED_MESSAGE: &str = "Failed to send email";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::Delivery(DeliveryError::MissingRequiredField(e)) => {
                tracing::warn!(error = %e, "Inquiry rejected");
                (StatusCode::BAD_REQUEST, "Missing required fields")
            }
            AppError::Delivery(DeliveryError::Transport(e)) => {
                tracing::error!(error = %e, "Error sending email");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
            AppError::Delivery(DeliveryError::Render(e)) => {
                tracing::error!(error = %e, "Error rendering inquiry email");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
            AppError::InvalidBody(rejection) => {
                tracing::warn!(error = %rejection, "Invalid request body");
                match rejection.status() {
                    StatusCode::PAYLOAD_TOO_LARGE => {
                        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
                    }
                    _ => (StatusCode::BAD_REQUEST, "Invalid request body"),
                }
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Template(e) => {
                tracing::error!(error = %e, "Failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, please retry later",
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
