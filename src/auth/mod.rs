//! Session login and the authorization policy gate.
//!
//! One handler set serves both deployment modes: `AuthPolicy` is injected
//! through the app state and consulted by the `require_auth` middleware on
//! the mutating routes, instead of maintaining parallel authenticated and
//! unauthenticated route modules.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::flash::Flash;

pub const SESSION_COOKIE: &str = "session_id";
const SESSION_MAX_AGE_SECS: u64 = 86400;

/// Resolved at login time so request paths never hit the store for auth.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct SessionEntry {
    user: SessionUser,
    created_at: Instant,
}

impl SessionEntry {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= SESSION_MAX_AGE_SECS
    }
}

/// In-process session registry, session id -> logged-in user. Entries
/// expire after `SESSION_MAX_AGE_SECS`, matching the cookie's Max-Age;
/// expired entries are evicted on the next lookup of their id.
pub type SessionMap = Arc<RwLock<HashMap<String, SessionEntry>>>;

pub fn new_session_map() -> SessionMap {
    Arc::new(RwLock::new(HashMap::new()))
}

/// Whether mutating routes demand a logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    Open,
    RequireLogin,
}

impl AuthPolicy {
    /// Accepts the `AUTH_MODE` env values; anything unrecognized falls
    /// back to requiring login rather than silently opening the admin up.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "open" | "none" | "disabled" => AuthPolicy::Open,
            _ => AuthPolicy::RequireLogin,
        }
    }
}

/// Gate on the mutating routes. Passes requests through under
/// `AuthPolicy::Open`; otherwise demands a live session and bounces
/// everything else to the login page.
pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.policy == AuthPolicy::Open {
        return next.run(request).await;
    }
    if session_user(request.headers(), &state.sessions).await.is_some() {
        return next.run(request).await;
    }
    Flash::warning("⚠️ Please log in first!").redirect("/login")
}

pub async fn create_session(sessions: &SessionMap, user: SessionUser) -> String {
    let session_id = Uuid::new_v4().to_string();
    let entry = SessionEntry {
        user,
        created_at: Instant::now(),
    };
    sessions.write().await.insert(session_id.clone(), entry);
    session_id
}

pub async fn destroy_session(sessions: &SessionMap, session_id: &str) {
    sessions.write().await.remove(session_id);
}

/// The logged-in user for this request, if any. An entry past its max age
/// is dropped from the map and reported as no session.
pub async fn session_user(headers: &HeaderMap, sessions: &SessionMap) -> Option<SessionUser> {
    let session_id = extract_session_id(headers)?;
    let entry = sessions.read().await.get(&session_id).cloned()?;
    if entry.is_expired() {
        sessions.write().await.remove(&session_id);
        return None;
    }
    Some(entry.user)
}

pub fn extract_session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str
                .split(';')
                .map(str::trim)
                .find_map(|cookie| cookie.strip_prefix("session_id="))
                .map(str::to_string)
        })
}

pub fn session_cookie(session_id: &str) -> String {
    format!(
        "{SESSION_COOKIE}={session_id}; HttpOnly; Path=/; Max-Age={SESSION_MAX_AGE_SECS}; SameSite=Lax"
    )
}

pub fn clear_session_cookie() -> &'static str {
    "session_id=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax"
}

pub async fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .unwrap()
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_session_round_trip() {
        let sessions = new_session_map();
        let session_id = create_session(
            &sessions,
            SessionUser {
                user_id: Uuid::new_v4(),
                username: "admin".to_string(),
            },
        )
        .await;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; session_id={session_id}")).unwrap(),
        );

        let user = session_user(&headers, &sessions).await.unwrap();
        assert_eq!(user.username, "admin");

        destroy_session(&sessions, &session_id).await;
        assert!(session_user(&headers, &sessions).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_evicted() {
        let sessions = new_session_map();
        let session_id = create_session(
            &sessions,
            SessionUser {
                user_id: Uuid::new_v4(),
                username: "admin".to_string(),
            },
        )
        .await;

        let stale = Instant::now()
            .checked_sub(std::time::Duration::from_secs(SESSION_MAX_AGE_SECS + 1))
            .unwrap();
        sessions
            .write()
            .await
            .get_mut(&session_id)
            .unwrap()
            .created_at = stale;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("session_id={session_id}")).unwrap(),
        );

        assert!(session_user(&headers, &sessions).await.is_none());
        // The lookup also dropped the entry from the map.
        assert!(!sessions.read().await.contains_key(&session_id));
    }

    #[test]
    fn test_missing_cookie_yields_no_session() {
        assert!(extract_session_id(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_policy_parsing_defaults_closed() {
        assert_eq!(AuthPolicy::parse("open"), AuthPolicy::Open);
        assert_eq!(AuthPolicy::parse("Disabled"), AuthPolicy::Open);
        assert_eq!(AuthPolicy::parse("required"), AuthPolicy::RequireLogin);
        assert_eq!(AuthPolicy::parse("banana"), AuthPolicy::RequireLogin);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123");
        assert!(cookie.starts_with("session_id=abc123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
    }
}
