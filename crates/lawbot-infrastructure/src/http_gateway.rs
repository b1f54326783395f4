//! HttpGateway - reqwest implementation of the backend contract.
//!
//! One client per app instance: fixed base origin, JSON content type by
//! default, and a cookie store so the session cookie set by `/auth/login`
//! accompanies every later request.

use async_trait::async_trait;
use lawbot_core::config::ClientConfig;
use lawbot_core::error::{LawbotError, Result};
use lawbot_core::gateway::{
    AUTH_LOGIN_PATH, AUTH_LOGOUT_PATH, AUTH_ME_PATH, AUTH_SIGNUP_PATH, BackendGateway,
};
use lawbot_core::guidance::{GuidanceResponse, resolve_resource_url};
use lawbot_core::query::{DocumentQuery, QueryRequest};
use lawbot_core::user::{Credentials, SignupRequest, UserProfile};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Gateway that talks to the Lawbot backend over HTTP.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: ClientConfig,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    user: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl HttpGateway {
    /// Creates a gateway for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validated()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LawbotError::config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!("[HttpGateway] Using backend {}", config.base_origin);
        Ok(Self { client, config })
    }

    /// Creates a gateway from `LAWBOT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Sends a request and turns non-2xx answers into `Rejected`.
    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("[HttpGateway] {} failed: {}", operation, e);
            LawbotError::transport(format!("{} request failed: {}", operation, e))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        tracing::debug!(
            "[HttpGateway] {} rejected with {}: {}",
            operation,
            status,
            message.as_deref().unwrap_or("<no message>")
        );
        Err(LawbotError::rejected(status.as_u16(), message))
    }

    async fn read_json<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            tracing::warn!("[HttpGateway] {} returned an unreadable body: {}", operation, e);
            LawbotError::transport(format!("Failed to parse {} response: {}", operation, e))
        })
    }

    fn multipart_form(query: &DocumentQuery) -> Result<Form> {
        let file = Part::bytes(query.document.bytes().to_vec())
            .file_name(query.document.file_name().to_string())
            .mime_str(query.document.mime_type())
            .map_err(|e| LawbotError::internal(format!("Invalid document mime type: {}", e)))?;

        let form = query
            .text_fields()
            .into_iter()
            .fold(Form::new().part("file", file), |form, (name, value)| {
                form.text(name, value)
            });

        Ok(form)
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    fn base_origin(&self) -> &str {
        &self.config.base_origin
    }

    async fn current_user(&self) -> Result<UserProfile> {
        let response = self
            .send(self.client.get(self.url(AUTH_ME_PATH)), "Session probe")
            .await?;
        Self::read_json(response, "Session probe").await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Option<UserProfile>> {
        let request = self.client.post(self.url(AUTH_LOGIN_PATH)).json(credentials);
        let response = self.send(request, "Login").await?;
        let body: LoginResponse = Self::read_json(response, "Login").await?;
        Ok(body.user)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<()> {
        let request = self.client.post(self.url(AUTH_SIGNUP_PATH)).json(request);
        self.send(request, "Signup").await?;
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        self.send(self.client.get(self.url(AUTH_LOGOUT_PATH)), "Logout")
            .await?;
        Ok(())
    }

    async fn submit_query(&self, request: &QueryRequest) -> Result<GuidanceResponse> {
        let url = self.url(request.path());
        let builder = match request {
            QueryRequest::Text(body) => self.client.post(url).json(body),
            QueryRequest::Document(body) => {
                tracing::debug!(
                    "[HttpGateway] Uploading {} ({} bytes)",
                    body.document.file_name(),
                    body.document.len()
                );
                self.client.post(url).multipart(Self::multipart_form(body)?)
            }
        };

        let response = self.send(builder, "Query").await?;
        Self::read_json(response, "Query").await
    }

    async fn fetch_resource(&self, url: &str) -> Result<Vec<u8>> {
        let url = resolve_resource_url(&self.config.base_origin, url)
            .ok_or_else(|| LawbotError::validation("Resource URL is empty."))?;

        let response = self.send(self.client.get(&url), "Resource download").await?;
        let bytes = response.bytes().await.map_err(|e| {
            LawbotError::transport(format!("Failed to read resource {}: {}", url, e))
        })?;
        Ok(bytes.to_vec())
    }
}

/// Extracts the backend's `{"error": "..."}` message from an error body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
