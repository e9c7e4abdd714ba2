use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use uuid::Uuid;

use crate::handlers::{flash_or_fail, page, PageQuery};
use crate::models::OrganizerForm;
use crate::state::AppState;
use crate::store::pagination::clamp_page;
use crate::utils::error::AppError;
use crate::utils::flash::{Flash, IncomingFlash};
use crate::views;

/// `GET /organizers` — name ascending, with event counts.
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let organizers = state.store.list_organizers_page(clamp_page(query.page)).await?;
    Ok(page("Organizers", &flash, &views::organizers::listing(&organizers)))
}

/// `GET /create_organizer`
pub async fn create_form(flash: IncomingFlash) -> Response {
    page(
        "Create organizer",
        &flash,
        &views::organizers::form("/create_organizer", None),
    )
}

/// `POST /create_organizer`
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<OrganizerForm>,
) -> Result<Response, AppError> {
    let new = match form.parse() {
        Ok(new) => new,
        Err(message) => return Ok(Flash::danger(message).redirect("/create_organizer")),
    };
    match state.store.create_organizer(&new).await {
        Ok(_) => Ok(Flash::success("✅ Organizer added successfully!").redirect("/organizers")),
        Err(err) => flash_or_fail(err, "/create_organizer"),
    }
}

/// `GET /organizers/update/{id}`
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    flash: IncomingFlash,
) -> Result<Response, AppError> {
    let Some(organizer) = state.store.get_organizer(id).await? else {
        return Ok(Flash::danger("⚠️ Organizer not found!").redirect("/organizers"));
    };
    Ok(page(
        "Update organizer",
        &flash,
        &views::organizers::form(&format!("/organizers/update/{id}"), Some(&organizer)),
    ))
}

/// `POST /organizers/update/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<OrganizerForm>,
) -> Result<Response, AppError> {
    let back = format!("/organizers/update/{id}");
    let new = match form.parse() {
        Ok(new) => new,
        Err(message) => return Ok(Flash::danger(message).redirect(&back)),
    };
    match state.store.update_organizer(id, &new).await {
        Ok(()) => Ok(Flash::success("✅ Organizer updated successfully!").redirect("/organizers")),
        Err(err) => flash_or_fail(err, &back),
    }
}

/// `GET /organizers/delete/{id}` — refused while events are attached.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.store.delete_organizer(id).await {
        Ok(()) => Ok(Flash::info("Organizer deleted!").redirect("/organizers")),
        Err(err) => flash_or_fail(err, "/organizers"),
    }
}
