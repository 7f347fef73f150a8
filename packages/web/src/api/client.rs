//! REST client for the Career OS API

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Error body the backend sends alongside non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// REST client rooted at the API prefix (e.g. `http://host/api/v1`)
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Client for the API configured in `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    /// Create a client that sends a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let response = self.authorize(self.client.post(&url).json(body)).send().await?;
        Self::decode(response).await
    }

    /// POST without a body, ignoring whatever the server answers with.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let response = self.authorize(self.client.post(&url)).send().await?;
        Self::check(response).await.map(|_| ())
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => req.header("Authorization", format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
        let bytes = Self::check(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&text, status.canonical_reason()),
        })
    }
}

fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    reason.unwrap_or("request failed").to_string()
}
