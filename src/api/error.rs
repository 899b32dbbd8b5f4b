//! Centralized error translation for the HTTP API.
//!
//! Every failure a handler can produce flows through [`ApiError`], the only
//! place a client-visible error response is shaped. Database failures are
//! classified exactly once, in the `From<sqlx::Error>` impl, into a tagged
//! variant per known SQLSTATE; everything unrecognized stays in `Database`
//! and surfaces as a generic `500` with the details kept server-side.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// One violated validation rule: the offending field plus a message suitable
/// for display.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
pub enum ApiError {
    /// Field validation failed; carries every collected rule violation in
    /// rule order. Safe to construct and map independently of the handler
    /// short-circuit path.
    Validation(Vec<FieldError>),
    Duplicate,
    ForeignKey,
    NotFound,
    Database(sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => Self::Duplicate,
                Some(FOREIGN_KEY_VIOLATION) => Self::ForeignKey,
                _ => Self::Database(err),
            },
            _ => Self::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    /// Maps failures into the uniform error envelope. Every variant is
    /// logged before mapping; only the `Validation` body carries details.
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                error!("Validation failed: {} field error(s)", errors.len());
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            Self::Duplicate => {
                error!("Unique constraint violation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Duplicate record" })),
                )
                    .into_response()
            }
            Self::ForeignKey => {
                error!("Foreign key constraint violation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Foreign key constraint failed" })),
                )
                    .into_response()
            }
            Self::NotFound => {
                error!("Record not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Record not found" })),
                )
                    .into_response()
            }
            Self::Database(err) => {
                error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
