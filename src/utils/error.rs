use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use crate::utils::flash::Flash;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Already registered for this event")]
    DuplicateRegistration,

    #[error("{0}")]
    HasDependents(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn log(&self) {
        match self {
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
            }
            other => {
                debug!(error = %other, "Request rejected");
            }
        }
    }
}

/// Fallback mapping for errors a handler does not translate itself.
/// User-level conditions become a redirect with a flash message (the
/// handlers usually pick a better redirect target); store failures are the
/// only hard failures.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        match self {
            AppError::NotFound(entity) => {
                Flash::warning(format!("⚠️ {entity} not found!")).redirect("/")
            }
            AppError::Validation(message) => Flash::danger(message).redirect("/"),
            AppError::DuplicateRegistration => {
                Flash::danger("⚠️ Already registered for this event!").redirect("/")
            }
            AppError::HasDependents(message) => Flash::danger(message).redirect("/"),
            AppError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "A database error occurred").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_database_error_is_fatal() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_user_conditions_redirect_with_flash() {
        let response = AppError::DuplicateRegistration.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }
}
