use std::env;

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Security header values. The CSP allows same-origin assets and form
/// posts since every page here is server-rendered HTML.
const NOSNIFF: &str = "nosniff";
const DENY: &str = "DENY";
const CSP_VALUE: &str = "default-src 'self'; form-action 'self'; frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";
const PERMISSIONS_POLICY_VALUE: &str = "geolocation=(), microphone=(), camera=()";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";

/// Stacks the security response headers onto the finished router.
/// HSTS is only meaningful behind HTTPS, so it is reserved for production.
pub fn apply_security_headers(router: Router, include_hsts: bool) -> Router {
    let router = router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static(NOSNIFF),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static(DENY),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CSP_VALUE),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static(REFERRER_POLICY_VALUE),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static(PERMISSIONS_POLICY_VALUE),
        ));

    if include_hsts {
        router.layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_VALUE),
        ))
    } else {
        router
    }
}

/// HSTS follows the deployment mode, not a per-request decision.
pub fn hsts_from_env() -> bool {
    let is_production = env::var("RUST_ENV")
        .map(|value| value.to_lowercase() == "production")
        .unwrap_or(false);

    if is_production {
        tracing::info!("Security: HSTS header enabled (production mode)");
    } else {
        tracing::info!("Security: HSTS header disabled (development mode)");
    }

    is_production
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    async fn respond(router: Router) -> axum::http::HeaderMap {
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.headers().clone()
    }

    #[tokio::test]
    async fn test_headers_applied_without_hsts() {
        let router = Router::new().route("/", get(|| async { "ok" }));
        let headers = respond(apply_security_headers(router, false)).await;

        assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), NOSNIFF);
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), DENY);
        assert_eq!(headers.get(header::CONTENT_SECURITY_POLICY).unwrap(), CSP_VALUE);
        assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
    }

    #[tokio::test]
    async fn test_hsts_only_in_production_mode() {
        let router = Router::new().route("/", get(|| async { "ok" }));
        let headers = respond(apply_security_headers(router, true)).await;

        assert_eq!(
            headers.get(header::STRICT_TRANSPORT_SECURITY).unwrap(),
            HSTS_VALUE
        );
    }
}
