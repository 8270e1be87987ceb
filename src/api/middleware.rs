//! Access gate for mutating API routes.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use super::error::ApiError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Security configuration loaded from environment variables.
#[derive(Clone, Debug, Default)]
pub struct SecurityConfig {
    /// API key required for mutating calls (from ROADMAPPER_API_KEY or API_KEY)
    pub api_key: Option<String>,
    /// Allowed CORS origins (from ROADMAPPER_CORS_ORIGINS, comma-separated)
    pub cors_origins: Option<Vec<String>>,
}

impl SecurityConfig {
    /// Load security configuration from environment variables.
    ///
    /// A key that is set but empty still closes the gate: nothing matches it.
    pub fn from_env() -> Self {
        let api_key = std::env::var("ROADMAPPER_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();

        let cors_origins = std::env::var("ROADMAPPER_CORS_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect());

        Self {
            api_key,
            cors_origins,
        }
    }

    /// Create a config with no authentication (for local development/testing).
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Create a config with authentication enabled.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            cors_origins: None,
        }
    }

    /// Create a config with specific CORS origins.
    pub fn with_cors_origins(origins: Vec<String>) -> Self {
        Self {
            api_key: None,
            cors_origins: Some(origins),
        }
    }

    /// Whether a caller-supplied credential matches the configured key.
    /// Always true when no key is configured, never true for an empty key.
    pub fn allows(&self, credential: Option<&str>) -> bool {
        match (&self.api_key, credential) {
            (None, _) => true,
            (Some(expected), Some(given)) => !expected.is_empty() && expected == given,
            (Some(_), None) => false,
        }
    }
}

/// Authentication middleware that checks for a valid API key.
///
/// Accepts the key in `X-API-Key` or as an `Authorization: Bearer` token.
pub async fn auth_middleware(
    State(config): State<SecurityConfig>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if config.api_key.is_none() {
        return Ok(next.run(request).await);
    }

    let (allowed, presented) = {
        let key = presented_key(&request);
        (config.allows(key), key.is_some())
    };
    if allowed {
        return Ok(next.run(request).await);
    }

    if presented {
        tracing::warn!("Invalid API key provided");
    } else {
        tracing::warn!("Missing API key");
    }
    Err(ApiError::Unauthorized)
}

fn presented_key(request: &Request<Body>) -> Option<&str> {
    let headers = request.headers();
    if let Some(key) = headers.get(API_KEY_HEADER).and_then(|h| h.to_str().ok()) {
        return Some(key);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware, routing::post, Router};
    use tower::ServiceExt;

    fn gated(config: SecurityConfig) -> Router {
        Router::new()
            .route("/", post(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(config, auth_middleware))
    }

    fn post_with(header: Option<(&str, &str)>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn security_config_disabled_has_no_auth() {
        let config = SecurityConfig::disabled();
        assert!(config.api_key.is_none());
        assert!(config.cors_origins.is_none());
        assert!(config.allows(None));
    }

    #[test]
    fn security_config_with_api_key_has_auth() {
        let config = SecurityConfig::with_api_key("test-key");
        assert_eq!(config.api_key, Some("test-key".to_string()));
        assert!(config.allows(Some("test-key")));
        assert!(!config.allows(Some("wrong")));
        assert!(!config.allows(None));
    }

    #[test]
    fn empty_api_key_matches_nothing() {
        let config = SecurityConfig::with_api_key("");
        assert!(!config.allows(Some("")));
        assert!(!config.allows(Some("anything")));
        assert!(!config.allows(None));
    }

    #[tokio::test]
    async fn empty_api_key_keeps_gate_closed() {
        let app = gated(SecurityConfig::with_api_key(""));

        let missing = app.clone().oneshot(post_with(None)).await.unwrap();
        let empty = app
            .clone()
            .oneshot(post_with(Some((API_KEY_HEADER, ""))))
            .await
            .unwrap();
        let bearer = app
            .oneshot(post_with(Some(("Authorization", "Bearer "))))
            .await
            .unwrap();

        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(empty.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(bearer.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn accepts_x_api_key_header() {
        let app = gated(SecurityConfig::with_api_key("secret"));
        let response = app
            .oneshot(post_with(Some((API_KEY_HEADER, "secret"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn accepts_bearer_token() {
        let app = gated(SecurityConfig::with_api_key("secret"));
        let response = app
            .oneshot(post_with(Some(("Authorization", "Bearer secret"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_missing_and_wrong_keys() {
        let app = gated(SecurityConfig::with_api_key("secret"));

        let missing = app.clone().oneshot(post_with(None)).await.unwrap();
        let wrong = app
            .clone()
            .oneshot(post_with(Some((API_KEY_HEADER, "nope"))))
            .await
            .unwrap();
        let basic = app
            .oneshot(post_with(Some(("Authorization", "Basic dXNlcjpwYXNz"))))
            .await
            .unwrap();

        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(basic.status(), StatusCode::UNAUTHORIZED);
    }
}
