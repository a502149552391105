use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use user_client::UserClientError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", Some(msg)),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", Some(msg))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserClientError> for ApiError {
    fn from(err: UserClientError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

/// Check if environment is production-like (prod, prod01, prod02, etc.)
pub fn is_prod_like(env: &str) -> bool {
    env.to_lowercase().starts_with("prod")
}

/// Converts a client error to an ApiError, logging it first.
/// In production, downstream error details are hidden.
pub fn handle_client_error(err: UserClientError, env: &str, operation: &str) -> ApiError {
    tracing::error!(env = %env, error = ?err, operation = %operation, "user service call failed");
    if is_prod_like(env) {
        ApiError::BadGateway("upstream service unavailable".to_string())
    } else {
        ApiError::from(err)
    }
}
