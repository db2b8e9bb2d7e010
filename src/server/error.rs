// src/server/error.rs
//! Mapping of catalog errors onto HTTP responses

use super::views;
use crate::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

fn status_of(err: &Error) -> StatusCode {
    match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::ValidationError(_) => StatusCode::BAD_REQUEST,
        Error::DataIntegrity(_)
        | Error::DatabaseError(_)
        | Error::IoError(_)
        | Error::InitError(_)
        | Error::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "not_found",
        StatusCode::BAD_REQUEST => "bad_request",
        _ => "internal",
    }
}

fn log(err: &Error, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::debug!("Request rejected: {}", err);
    }
}

/// Error returned by JSON API handlers
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        log(&self.0, status);

        // Internal details stay in the log
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = serde_json::json!({
            "error": error_code(status),
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by HTML handlers
#[derive(Debug)]
pub struct PageError(pub Error);

impl From<Error> for PageError {
    fn from(err: Error) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        log(&self.0, status);

        (status, views::error_page(status)).into_response()
    }
}

/// Result type for HTML handlers
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(&Error::NotFound("Recipe 1".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(&Error::DataIntegrity("missing id".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(&Error::ValidationError("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_api_error_response() {
        let response = ApiError(Error::NotFound("Recipe 9".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = PageError(Error::IoError("disk".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
