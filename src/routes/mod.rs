use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::handlers::{attendees, auth, dashboard, events, health_check, organizers, registration};
use crate::state::AppState;

/// One handler set for both deployment modes: the mutating routes sit
/// behind `require_auth`, which consults the injected `AuthPolicy` and
/// waves everything through when the instance runs open.
pub fn create_routes(state: AppState) -> Router {
    let mutating = Router::new()
        .route("/create_event", get(events::create_form).post(events::create))
        .route("/events/update/:id", get(events::update_form).post(events::update))
        .route("/events/delete/:id", get(events::delete))
        .route("/create_organizer", get(organizers::create_form).post(organizers::create))
        .route("/organizers/update/:id", get(organizers::update_form).post(organizers::update))
        .route("/organizers/delete/:id", get(organizers::delete))
        .route("/create_attendee", get(attendees::create_form).post(attendees::create))
        .route("/attendees/update/:id", get(attendees::update_form).post(attendees::update))
        .route("/attendees/delete/:id", post(attendees::delete))
        .route("/register_event/:event_id", get(registration::form).post(registration::register))
        .route(
            "/unregister_event/:event_id/:attendee_id",
            get(registration::unregister),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(events::home))
        .route("/health", get(health_check))
        .route("/events", get(events::listing))
        .route("/events/:id", get(events::detail))
        .route("/organizers", get(organizers::listing))
        .route("/attendees", get(attendees::listing))
        .route("/attendees/:id", get(attendees::detail))
        .route("/dashboard", get(dashboard::show))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .merge(mutating)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::auth::{self, AuthPolicy, SessionUser};
    use crate::store::Store;

    // A lazy pool never connects unless a query runs; these tests only
    // exercise routes that stay out of the database.
    fn test_state(policy: AuthPolicy) -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/boxoffice_test")
            .unwrap();
        AppState {
            store: Store::new(pool),
            sessions: auth::new_session_map(),
            policy,
        }
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_probe() {
        let app = create_routes(test_state(AuthPolicy::RequireLogin));
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_mutating_route_without_session_bounces_to_login() {
        let app = create_routes(test_state(AuthPolicy::RequireLogin));
        let response = app.oneshot(get_request("/create_organizer")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn test_mutating_route_with_session_reaches_handler() {
        let state = test_state(AuthPolicy::RequireLogin);
        let session_id = auth::create_session(
            &state.sessions,
            SessionUser {
                user_id: Uuid::new_v4(),
                username: "admin".to_string(),
            },
        )
        .await;
        let app = create_routes(state);

        let request = Request::builder()
            .uri("/create_organizer")
            .header(header::COOKIE, format!("session_id={session_id}"))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_open_policy_skips_the_gate() {
        let app = create_routes(test_state(AuthPolicy::Open));
        let response = app.oneshot(get_request("/create_organizer")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_page_is_public() {
        let app = create_routes(test_state(AuthPolicy::RequireLogin));
        let response = app.oneshot(get_request("/login")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
