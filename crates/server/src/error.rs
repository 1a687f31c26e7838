//! Translation of extractor failures into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tablesift_extract::ExtractError;

/// JSON body returned for every failed request.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub detail: String,
}

/// Handler error wrapping a failed extractor query.
pub struct ApiError(ExtractError);

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            tracing::error!("query failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = ApiError::from(ExtractError::TableNotFound {
            name: "Cash Flow".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::from(ExtractError::RowNotFound {
            table: "Cash Flow".to_string(),
            row: "Capex".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_failures_are_server_errors() {
        let err = tablesift_extract::TableExtractor::open("/nonexistent/capbudg.xls").unwrap_err();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
