/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use space_core::database::LookupError;
use space_core::types::BaseResponse;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    Forbidden(String),
    NotFound(String),
    /// A lookup that must be unique matched several rows.
    IntegrityViolation(String),
    Database(DbErr),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::IntegrityViolation(msg) => write!(f, "Integrity violation: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<LookupError> for WebError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(resource) => WebError::not_found(resource),
            LookupError::MultipleResults(_) => WebError::IntegrityViolation(err.to_string()),
            LookupError::Database(err) => WebError::Database(err),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::IntegrityViolation(msg) => {
                tracing::error!(error = %msg, "Uniqueness invariant violated");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn operation_disabled() -> Self {
        WebError::Forbidden("Operation is not publicly accessible".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_status() {
        let not_found: WebError = LookupError::NotFound("Deploy board").into();
        assert_eq!(not_found.to_string(), "Not Found: Deploy board not found");
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let duplicate: WebError = LookupError::MultipleResults("Deploy board").into();
        assert!(matches!(duplicate, WebError::IntegrityViolation(_)));
        assert_eq!(
            duplicate.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let database: WebError = LookupError::Database(DbErr::Custom("gone".into())).into();
        assert_eq!(
            database.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_operation_disabled_status() {
        assert_eq!(
            WebError::operation_disabled().into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
