use axum::extract::State;
use axum::response::Response;

use crate::handlers::page;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::flash::IncomingFlash;
use crate::views;

/// `GET /dashboard`
pub async fn show(
    State(state): State<AppState>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let stats = state.store.dashboard().await?;
    Ok(page("Dashboard", &flash, &views::dashboard::dashboard(&stats)))
}
