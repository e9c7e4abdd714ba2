use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use uuid::Uuid;

use crate::handlers::{flash_or_fail, page, PageQuery};
use crate::models::AttendeeForm;
use crate::state::AppState;
use crate::store::pagination::clamp_page;
use crate::utils::error::AppError;
use crate::utils::flash::{Flash, IncomingFlash};
use crate::views;

/// `GET /attendees` — name ascending, with registration counts.
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let attendees = state.store.list_attendees_page(clamp_page(query.page)).await?;
    Ok(page("Attendees", &flash, &views::attendees::listing(&attendees)))
}

/// `GET /attendees/{id}` — detail plus the events they registered for.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let Some(attendee) = state.store.get_attendee(id).await? else {
        return Ok(Flash::danger("⚠️ Attendee not found!").redirect("/attendees"));
    };
    let events = state.store.attendee_events(id).await?;
    Ok(page(&attendee.name, &flash, &views::attendees::detail(&attendee, &events)))
}

/// `GET /create_attendee`
pub async fn create_form(flash: IncomingFlash) -> Response {
    page(
        "Create attendee",
        &flash,
        &views::attendees::form("/create_attendee", None),
    )
}

/// `POST /create_attendee`
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<AttendeeForm>,
) -> Result<Response, AppError> {
    let new = match form.parse() {
        Ok(new) => new,
        Err(message) => return Ok(Flash::danger(message).redirect("/create_attendee")),
    };
    match state.store.create_attendee(&new).await {
        Ok(_) => Ok(Flash::success("✅ Attendee added successfully!").redirect("/attendees")),
        Err(err) => flash_or_fail(err, "/create_attendee"),
    }
}

/// `GET /attendees/update/{id}`
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let Some(attendee) = state.store.get_attendee(id).await? else {
        return Ok(Flash::danger("⚠️ Attendee not found!").redirect("/attendees"));
    };
    Ok(page(
        "Update attendee",
        &flash,
        &views::attendees::form(&format!("/attendees/update/{id}"), Some(&attendee)),
    ))
}

/// `POST /attendees/update/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<AttendeeForm>,
) -> Result<Response, AppError> {
    let back = format!("/attendees/update/{id}");
    let new = match form.parse() {
        Ok(new) => new,
        Err(message) => return Ok(Flash::danger(message).redirect(&back)),
    };
    match state.store.update_attendee(id, &new).await {
        Ok(()) => Ok(Flash::success("✅ Attendee updated successfully!").redirect("/attendees")),
        Err(err) => flash_or_fail(err, &back),
    }
}

/// `POST /attendees/delete/{id}` — refused while tickets are held.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.store.delete_attendee(id).await {
        Ok(()) => Ok(Flash::info("Attendee deleted!").redirect("/attendees")),
        Err(err) => flash_or_fail(err, "/attendees"),
    }
}
