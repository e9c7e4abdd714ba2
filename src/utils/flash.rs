use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};

const FLASH_COOKIE: &str = "flash";

/// Category of a transient status message, mirrored in the page styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Level::Success),
            "info" => Some(Level::Info),
            "warning" => Some(Level::Warning),
            "danger" => Some(Level::Danger),
            _ => None,
        }
    }
}

/// One-shot user-facing message carried across a redirect in a short-lived
/// cookie. Every mutating route answers with `Flash::...(msg).redirect(to)`.
#[derive(Debug, Clone)]
pub struct Flash {
    level: Level,
    message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: Level::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: Level::Warning, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self { level: Level::Danger, message: message.into() }
    }

    /// 303 redirect carrying the flash cookie.
    pub fn redirect(self, to: &str) -> Response {
        let cookie = format!(
            "{}={}:{}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            self.level.as_str(),
            urlencoding::encode(&self.message)
        );
        let mut response = Redirect::to(to).into_response();
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        response
    }
}

/// Flash message left by the previous request, read by page handlers.
/// Rendering a page consumes the message: `clear_headers` invalidates the
/// cookie so it is shown exactly once.
#[derive(Debug, Default)]
pub struct IncomingFlash {
    pub message: Option<(Level, String)>,
}

impl IncomingFlash {
    pub fn clear_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.message.is_some() {
            headers.insert(
                header::SET_COOKIE,
                HeaderValue::from_static("flash=; Path=/; HttpOnly; Max-Age=0; SameSite=Lax"),
            );
        }
        headers
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let message = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_flash_cookie);
        Ok(Self { message })
    }
}

fn parse_flash_cookie(cookie_header: &str) -> Option<(Level, String)> {
    let raw = cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix("flash="))?;
    let (level, encoded) = raw.split_once(':')?;
    let message = urlencoding::decode(encoded).ok()?;
    if message.is_empty() {
        return None;
    }
    Some((Level::parse(level)?, message.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_cookie_round_trip() {
        let response = Flash::success("Event added successfully!").redirect("/events");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let (level, message) = parse_flash_cookie(&cookie).unwrap();
        assert_eq!(level, Level::Success);
        assert_eq!(message, "Event added successfully!");
    }

    #[test]
    fn test_flash_redirect_sets_location() {
        let response = Flash::info("Event deleted!").redirect("/");
        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[test]
    fn test_parse_ignores_other_cookies() {
        let header = "session_id=abc123; flash=danger:Already%20registered%21; theme=dark";
        let (level, message) = parse_flash_cookie(header).unwrap();
        assert_eq!(level, Level::Danger);
        assert_eq!(message, "Already registered!");
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        assert!(parse_flash_cookie("flash=fatal:boom").is_none());
    }

    #[test]
    fn test_cleared_cookie_yields_no_message() {
        assert!(parse_flash_cookie("flash=").is_none());
    }

    #[test]
    fn test_clear_headers_only_when_present() {
        let none = IncomingFlash { message: None };
        assert!(none.clear_headers().is_empty());

        let some = IncomingFlash {
            message: Some((Level::Info, "Logged out".to_string())),
        };
        assert!(some.clear_headers().contains_key(header::SET_COOKIE));
    }
}
