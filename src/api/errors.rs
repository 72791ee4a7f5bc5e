//! # API Errors
//!
//! Error types at the request boundary, mapped onto HTTP statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::quote::{QuoteError, QuoteErrorCode};

use super::response::ErrorResponse;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the quote API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body is not a JSON object or violates the input contract
    #[error("{0}")]
    InvalidInput(String),

    /// Bearer token missing or mismatched
    #[error("Unauthorized")]
    Unauthorized,

    /// Invariant failure inside the calculator; unreachable once
    /// validation has passed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err.code() {
            QuoteErrorCode::InvalidInput => ApiError::InvalidInput(err.message().to_string()),
            QuoteErrorCode::UnsupportedLoanType => ApiError::Internal(err.message().to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::ValidationDetails;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidInput("bad ltv".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_quote_error_mapping() {
        let rejected = QuoteError::invalid_input(ValidationDetails::missing_field("ltv"));
        assert_eq!(
            ApiError::from(rejected).status_code(),
            StatusCode::BAD_REQUEST
        );

        let invariant = QuoteError::unsupported_loan_type("Jumbo");
        assert_eq!(
            ApiError::from(invariant).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_message_is_terse() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
    }
}
