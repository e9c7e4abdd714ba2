use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use uuid::Uuid;

use crate::handlers::{flash_or_fail, page, PageQuery};
use crate::models::EventForm;
use crate::state::AppState;
use crate::store::pagination::clamp_page;
use crate::utils::error::AppError;
use crate::utils::flash::{Flash, IncomingFlash};
use crate::views;

/// `GET /` — five upcoming events per page, soonest first.
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let events = state.store.home_events_page(clamp_page(query.page)).await?;
    Ok(page("Upcoming events", &flash, &views::events::home(&events)))
}

/// `GET /events` — ten per page, most recent date first.
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let events = state.store.list_events_page(clamp_page(query.page)).await?;
    Ok(page("Events", &flash, &views::events::listing(&events)))
}

/// `GET /events/{id}`
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let Some(event) = state.store.get_event_summary(id).await? else {
        return Ok(Flash::danger("⚠️ Event not found!").redirect("/events"));
    };
    let registered = state.store.registered_attendees(id).await?;
    Ok(page(&event.name, &flash, &views::events::detail(&event, &registered)))
}

/// `GET /create_event`
pub async fn create_form(
    State(state): State<AppState>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let organizers = state.store.list_organizers().await?;
    if organizers.is_empty() {
        return Ok(Flash::warning("⚠️ Create an organizer first!").redirect("/create_organizer"));
    }
    Ok(page(
        "Create event",
        &flash,
        &views::events::form("/create_event", &organizers, None),
    ))
}

/// `POST /create_event`
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<EventForm>,
) -> Result<Response, AppError> {
    let new = match form.parse() {
        Ok(new) => new,
        Err(message) => return Ok(Flash::danger(message).redirect("/create_event")),
    };
    match state.store.create_event(&new).await {
        Ok(_) => Ok(Flash::success("✅ Event added successfully!").redirect("/events")),
        Err(err) => flash_or_fail(err, "/create_event"),
    }
}

/// `GET /events/update/{id}`
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let Some(event) = state.store.get_event(id).await? else {
        return Ok(Flash::danger("⚠️ Event not found!").redirect("/events"));
    };
    let organizers = state.store.list_organizers().await?;
    Ok(page(
        "Update event",
        &flash,
        &views::events::form(&format!("/events/update/{id}"), &organizers, Some(&event)),
    ))
}

/// `POST /events/update/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<EventForm>,
) -> Result<Response, AppError> {
    let back = format!("/events/update/{id}");
    let new = match form.parse() {
        Ok(new) => new,
        Err(message) => return Ok(Flash::danger(message).redirect(&back)),
    };
    match state.store.update_event(id, &new).await {
        Ok(()) => Ok(Flash::success("✅ Event updated successfully!").redirect("/events")),
        Err(err) => flash_or_fail(err, &back),
    }
}

/// `GET /events/delete/{id}` — unconditional; tickets cascade away.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    state.store.delete_event(id).await?;
    Ok(Flash::info("Event deleted!").redirect("/events"))
}
