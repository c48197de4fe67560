use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::speller::{SpellIssue, SpellerError};
use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    Sqlx(sqlx::Error),
    PasswordHash(argon2::password_hash::Error),
    Jwt(jsonwebtoken::errors::Error),
    LoginFail,
    UserExists,
    BadDate,
    Unauthenticated,
    Spelling(Vec<SpellIssue>),
    Speller(SpellerError),
}

impl From<sqlx::Error> for AppError {
    fn from(inner: sqlx::Error) -> Self {
        AppError::Sqlx(inner)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(inner: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(inner)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(inner: jsonwebtoken::errors::Error) -> Self {
        AppError::Jwt(inner)
    }
}

impl From<SpellerError> for AppError {
    fn from(inner: SpellerError) -> Self {
        AppError::Speller(inner)
    }
}

// Fallback for store errors the services did not map to a domain outcome:
// everything ends up as an internal error.
impl From<StoreError> for AppError {
    fn from(inner: StoreError) -> Self {
        match inner {
            StoreError::NotFound => AppError::Sqlx(sqlx::Error::RowNotFound),
            StoreError::BadHash(e) => AppError::PasswordHash(e),
            StoreError::Database(e) => AppError::Sqlx(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Sqlx(e) => {
                // Check for unique constraint violation
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({"error": "Username already exists"})),
                        )
                            .into_response();
                    }
                }
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::PasswordHash(e) => {
                tracing::error!("Password hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Speller(e) => {
                tracing::error!("Speller error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::LoginFail => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            AppError::UserExists => (
                StatusCode::CONFLICT,
                "Username already exists".to_string(),
            ),
            AppError::BadDate => (
                StatusCode::BAD_REQUEST,
                "Invalid date format, expected RFC3339".to_string(),
            ),
            AppError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            AppError::Spelling(issues) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Spelling errors found in description",
                        "issues": issues,
                    })),
                )
                    .into_response();
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
