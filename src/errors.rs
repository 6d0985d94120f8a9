use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Failures of a downstream dependency while serving a request.
///
/// Missing configuration is not an error here; handlers report it as a
/// regular JSON payload (see [`crate::models::Outcome`]).
#[derive(Debug)]
pub enum AppError {
    /// Relational store failure (connect, DDL, insert, commit).
    Database(sqlx::Error),
    /// Network-level failure talking to the IdeaSoft API.
    Upstream(reqwest::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Upstream(e) => write!(f, "External API error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Database(e) => Some(e),
            AppError::Upstream(e) => Some(e),
        }
    }
}

impl IntoResponse for AppError {
    /// Every downstream failure becomes a bare 500; details only go to the log.
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Upstream(e) => tracing::error!("External API error: {:?}", e),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err)
    }
}
