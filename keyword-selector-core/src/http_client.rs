//! HTTP backend client
//!
//! Talks to the analysis server over two JSON endpoints:
//! - `POST /analyze`  `{ "topic": ... }` → [`AnalysisResult`]
//! - `POST /generate` `{ "keywords": [...], "title": ... }` → [`GenerateResponse`]
//!
//! # design principles
//! - **One request flow** - sending, logging and status mapping live in [`HttpUtils`]
//! - **No automatic retry** - every failure goes back to the user, who re-triggers the action
//! - **No default timeout** - a request stays pending until the server settles it,
//!   unless a timeout is configured explicitly

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::traits::ScriptBackend;
use crate::types::{AnalysisResult, AnalyzeRequest, GenerateRequest, GenerateResponse};
use crate::utils::log_sanitizer::truncate_for_log;

/// Analysis endpoint path
pub const ANALYZE_ENDPOINT: &str = "/analyze";
/// Script generation endpoint path
pub const GENERATE_ENDPOINT: &str = "/generate";

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// Unified processing: sending requests, logging, status mapping
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "POST", used for logs)
    /// * `endpoint` - endpoint path, recorded in errors and logs
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(RequestError::Network)` - transport failure or unreadable body
    /// * `Err(RequestError::Status)` - any non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        endpoint: &str,
    ) -> Result<String, RequestError> {
        log::debug!("{method_name} {endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            let detail = if e.is_timeout() {
                format!("timed out: {e}")
            } else {
                e.to_string()
            };
            RequestError::Network {
                endpoint: endpoint.to_string(),
                detail,
            }
        })?;

        let status = response.status();
        log::debug!("{endpoint} Response Status: {}", status.as_u16());

        let response_text = response
            .text()
            .await
            .map_err(|e| RequestError::Network {
                endpoint: endpoint.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            log::warn!(
                "{endpoint} failed with HTTP {}: {}",
                status.as_u16(),
                truncate_for_log(&response_text)
            );
            return Err(RequestError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: response_text,
            });
        }

        log::debug!(
            "{endpoint} Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(RequestError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("{endpoint} JSON parse failed: {e}");
            log::error!("{endpoint} Raw response: {}", truncate_for_log(response_text));
            RequestError::Parse {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// [`ScriptBackend`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:5000`)
    ///
    /// # Arguments
    /// * `base_url` - scheme, host and port, trailing slash optional
    /// * `timeout` - per-request timeout, `None` waits indefinitely
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| RequestError::Network {
            endpoint: base_url.clone(),
            detail: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    /// Server base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, RequestError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| RequestError::Serialization {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        })?;

        let request = self
            .client
            .post(self.url(endpoint))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);

        let text = HttpUtils::execute_request(request, "POST", endpoint).await?;
        HttpUtils::parse_json(&text, endpoint)
    }
}

#[async_trait]
impl ScriptBackend for HttpBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, RequestError> {
        log::info!("Analyzing topic '{}'", request.topic);
        self.post_json(ANALYZE_ENDPOINT, request).await
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, RequestError> {
        log::info!(
            "Generating script with keywords {:?}, title {}",
            request.keywords,
            request.title
        );
        self.post_json(GENERATE_ENDPOINT, request).await
    }
}
