use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::models::iso_timestamp;
use crate::routes::AVAILABLE_ENDPOINTS;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {details}")]
    InvalidInput {
        details: String,
        /// The userId as supplied by the caller, `null` when missing
        user_id: Value,
    },

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status: &'static str,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_endpoints: Option<&'static [&'static str]>,
    timestamp: String,
}

impl ErrorBody {
    fn new(message: &'static str) -> Self {
        Self {
            status: "error",
            message,
            details: None,
            user_id: None,
            available_endpoints: None,
            timestamp: iso_timestamp(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput { details, user_id } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    details: Some(details),
                    user_id: Some(user_id),
                    ..ErrorBody::new("Invalid input format")
                },
            ),
            AppError::EndpointNotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    available_endpoints: Some(AVAILABLE_ENDPOINTS),
                    ..ErrorBody::new("Endpoint not found")
                },
            ),
            AppError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    details: Some(details),
                    ..ErrorBody::new("Internal server error")
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_input_response() {
        let response = AppError::InvalidInput {
            details: "userId is required and must be a string".to_string(),
            user_id: Value::Null,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid input format");
        assert_eq!(body["userId"], Value::Null);
        assert!(body.as_object().unwrap().contains_key("userId"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_not_found_lists_endpoints() {
        let response = AppError::EndpointNotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["availableEndpoints"].as_array().unwrap().len(), 3);
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_carries_details() {
        let response = AppError::Internal("scoring exploded".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["details"], "scoring exploded");
    }
}
