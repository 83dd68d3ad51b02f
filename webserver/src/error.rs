//! WebServer-specific error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracker::CheckInError;
use tracker::core::messages;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Check-in rejected: {0}")]
    CheckIn(#[from] CheckInError),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::CheckIn(CheckInError::DuplicateAttendee { .. }) => StatusCode::CONFLICT,
            WebServerError::CheckIn(_) | WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text suitable for the greeting banner
    pub fn user_message(&self) -> String {
        match self {
            WebServerError::CheckIn(e) => messages::rejection(e),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.user_message(),
        }));
        (self.status_code(), body).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
