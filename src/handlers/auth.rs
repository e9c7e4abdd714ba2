use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Response;
use axum::Form;

use crate::auth::{self, SessionUser};
use crate::handlers::page;
use crate::models::LoginForm;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::flash::{Flash, IncomingFlash};
use crate::views;

/// `GET /login`
pub async fn login_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    flash: IncomingFlash,
) -> Response {
    if auth::session_user(&headers, &state.sessions).await.is_some() {
        return Flash::info("You are already logged in.").redirect("/");
    }
    page("Log in", &flash, &views::auth::login())
}

/// `POST /login`. A wrong username and a wrong password flash the same
/// message.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim();
    let password = form.password.trim();
    if username.is_empty() || password.is_empty() {
        return Ok(Flash::danger("Username and password are required!").redirect("/login"));
    }

    let Some(user) = state.store.get_user_by_username(username).await? else {
        return Ok(Flash::danger("⚠️ Invalid username or password!").redirect("/login"));
    };
    let verified = auth::verify_password(password, &user.password_hash)
        .await
        .unwrap_or(false);
    if !verified {
        return Ok(Flash::danger("⚠️ Invalid username or password!").redirect("/login"));
    }

    let session_id = auth::create_session(
        &state.sessions,
        SessionUser {
            user_id: user.id,
            username: user.username.clone(),
        },
    )
    .await;
    tracing::info!(username = %user.username, "User logged in");

    let mut response = Flash::success("✅ Logged in successfully!").redirect("/");
    if let Ok(cookie) = HeaderValue::from_str(&auth::session_cookie(&session_id)) {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

/// `GET /logout` — drops the session and invalidates its cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(session_id) = auth::extract_session_id(&headers) {
        auth::destroy_session(&state.sessions, &session_id).await;
    }
    let mut response = Flash::info("Logged out.").redirect("/login");
    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_static(auth::clear_session_cookie()),
    );
    response
}
