//! HTTP client for the Roadmapper API.
//!
//! Configuration is via environment variables:
//! - `ROADMAPPER_URL` - Base URL (default: `http://127.0.0.1:5000/api/v1`)
//! - `ROADMAPPER_API_KEY` - API key for creating roadmaps and updating milestones

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::api::API_KEY_HEADER;
use crate::models::*;

/// Default URL for local development.
pub const DEFAULT_URL: &str = "http://127.0.0.1:5000/api/v1";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: API key required or invalid")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the Roadmapper API.
#[derive(Debug, Clone)]
pub struct RoadmapClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl RoadmapClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ROADMAPPER_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let api_key = std::env::var("ROADMAPPER_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();
        Self::new(base_url, api_key)
    }

    /// Create with explicit configuration.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    /// Build a request with the API key header when one is configured.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        req
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
            StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(message)),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            _ => Err(ClientError::Server(format!("{}: {}", status, message))),
        }
    }

    /// List the interest path ids the server accepts.
    pub async fn paths(&self) -> Result<PathsResponse, ClientError> {
        let response = self.request(Method::GET, "/paths").send().await?;
        self.handle_response(response).await
    }

    pub async fn quote(&self) -> Result<Quote, ClientError> {
        let response = self.request(Method::GET, "/quote").send().await?;
        self.handle_response(response).await
    }

    pub async fn create_roadmap(
        &self,
        input: &CreateRoadmapInput,
    ) -> Result<CreateRoadmapResponse, ClientError> {
        let response = self
            .request(Method::POST, "/roadmaps")
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn get_roadmap(&self, id: Uuid) -> Result<Roadmap, ClientError> {
        let response = self
            .request(Method::GET, &format!("/roadmaps/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Mark a milestone completed (or not).
    pub async fn update_milestone(
        &self,
        id: Uuid,
        index: i64,
        completed: bool,
    ) -> Result<MilestoneUpdateResponse, ClientError> {
        let response = self
            .request(Method::PUT, &format!("/roadmaps/{}/milestones/{}", id, index))
            .json(&UpdateMilestoneInput::new(completed))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
