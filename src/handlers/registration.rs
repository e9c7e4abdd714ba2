use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::{flash_or_fail, page};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::flash::{Flash, IncomingFlash};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub attendee_id: String,
}

/// `GET /register_event/{event_id}`
pub async fn form(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let Some(event) = state.store.get_event(event_id).await? else {
        return Ok(Flash::danger("⚠️ Event not found!").redirect("/events"));
    };
    let available = state.store.available_attendees(event_id).await?;
    let registered = state.store.registered_attendees(event_id).await?;
    Ok(page(
        &format!("Register for {}", event.name),
        &flash,
        &views::events::register(&event, &available, &registered),
    ))
}

/// `POST /register_event/{event_id}`
pub async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let back = format!("/register_event/{event_id}");
    let Ok(attendee_id) = Uuid::parse_str(form.attendee_id.trim()) else {
        return Ok(Flash::danger("Please pick an attendee!").redirect(&back));
    };
    match state.store.register(event_id, attendee_id).await {
        Ok(_) => Ok(Flash::success("✅ Registered successfully!").redirect(&back)),
        Err(err) => flash_or_fail(err, &back),
    }
}

/// `GET /unregister_event/{event_id}/{attendee_id}`
pub async fn unregister(
    State(state): State<AppState>,
    Path((event_id, attendee_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, AppError> {
    state.store.unregister(event_id, attendee_id).await?;
    Ok(Flash::info("Unregistered from the event.").redirect(&format!("/events/{event_id}")))
}
