//! Route handlers. Page handlers fetch and render; mutating handlers
//! validate, call the store, and answer with a flash redirect. User-level
//! store errors are translated to a flash on a route-appropriate target;
//! only database failures propagate as hard 500s.

pub mod attendees;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod organizers;
pub mod registration;

use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::utils::error::AppError;
use crate::utils::flash::{Flash, IncomingFlash};
use crate::views;

/// `?page=` query on the paginated listings.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// Renders a page inside the shared layout, consuming any pending flash.
pub(crate) fn page(title: &str, flash: &IncomingFlash, body: &str) -> Response {
    let html = views::layout(title, flash.message.as_ref(), body);
    (flash.clear_headers(), Html(html)).into_response()
}

/// Turns a user-level store error into a flash redirect to `back`;
/// database failures stay errors and reach the fallback 500 path.
pub(crate) fn flash_or_fail(err: AppError, back: &str) -> Result<Response, AppError> {
    match err {
        AppError::Database(_) => Err(err),
        AppError::NotFound(entity) => {
            Ok(Flash::warning(format!("⚠️ {entity} not found!")).redirect(back))
        }
        AppError::DuplicateRegistration => {
            Ok(Flash::danger("⚠️ Already registered for this event!").redirect(back))
        }
        AppError::Validation(message) | AppError::HasDependents(message) => {
            Ok(Flash::danger(message).redirect(back))
        }
    }
}

pub async fn health_check() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "service": "boxoffice-server",
    }))
    .into_response()
}
