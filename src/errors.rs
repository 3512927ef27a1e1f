// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::header, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and error response.
/// Soft authentication failures redirect instead of returning a hard status.
#[derive(Error, Debug)]
pub enum CampError {
    #[error("Campground not found: {0}")]
    CampgroundNotFound(String),

    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    #[allow(dead_code)]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    Conflict(String),

    #[error("You must be signed in")]
    Unauthenticated,

    #[error("You do not have permission to do that!")]
    #[allow(dead_code)]
    Forbidden,

    #[error("Oh No, Something Went Wrong!")]
    InternalError,
}

/// Convert CampError to HTTP response
/// DOCUMENTATION: Maps error types to status codes and JSON error bodies.
/// `Unauthenticated` is the one soft failure rendered centrally: it becomes a
/// 303 redirect to the login page rather than an error body.
impl ResponseError for CampError {
    fn error_response(&self) -> HttpResponse {
        if let CampError::Unauthenticated = self {
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/login"))
                .finish();
        }

        let error_code = match self {
            CampError::CampgroundNotFound(_) => "CAMPGROUND_NOT_FOUND",
            CampError::ReviewNotFound(_) => "REVIEW_NOT_FOUND",
            CampError::NotFound(_) => "NOT_FOUND",
            CampError::DatabaseError(_) => "DATABASE_ERROR",
            CampError::InvalidInput(_) => "INVALID_INPUT",
            CampError::ValidationError(_) => "VALIDATION_ERROR",
            CampError::Conflict(_) => "CONFLICT",
            CampError::Unauthenticated => "UNAUTHENTICATED",
            CampError::Forbidden => "FORBIDDEN",
            CampError::InternalError => "INTERNAL_ERROR",
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            CampError::CampgroundNotFound(_) => StatusCode::NOT_FOUND,
            CampError::ReviewNotFound(_) => StatusCode::NOT_FOUND,
            CampError::NotFound(_) => StatusCode::NOT_FOUND,
            CampError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CampError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CampError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CampError::Conflict(_) => StatusCode::CONFLICT,
            CampError::Unauthenticated => StatusCode::SEE_OTHER,
            CampError::Forbidden => StatusCode::FORBIDDEN,
            CampError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            CampError::ValidationError("price must be at least 0".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CampError::CampgroundNotFound("abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CampError::Conflict("username taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CampError::DatabaseError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unauthenticated_redirects_to_login() {
        let resp = CampError::Unauthenticated.error_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok());
        assert_eq!(location, Some("/login"));
    }

    #[test]
    fn internal_error_carries_default_message() {
        assert_eq!(
            CampError::InternalError.to_string(),
            "Oh No, Something Went Wrong!"
        );
    }
}
