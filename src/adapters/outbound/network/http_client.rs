use crate::shared::error::StatsError;
use crate::shared::Result;
use anyhow::Context;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Per-request timeout shared by all upstream services
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Attempts per request, including the first one
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Outcome of a single attempt that did not succeed
enum AttemptError {
    /// Network failures, 429 and 5xx responses: worth another try
    Transient(anyhow::Error),
    /// Any other failure: retrying would return the same answer
    Permanent(anyhow::Error),
}

/// JSON-over-HTTP client shared by the network adapters
///
/// Wraps a `reqwest::Client` with the tool's user agent, a 10s timeout and
/// linear back-off retries. A 404 is an answer ("does not exist"), not an error.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    service: &'static str,
    max_retries: u32,
}

impl HttpClient {
    /// Creates a client for the named upstream service
    ///
    /// # Arguments
    /// * `service` - Human-readable service name used in error messages
    pub fn new(service: &'static str) -> Result<Self> {
        Self::with_headers(service, HeaderMap::new())
    }

    /// Creates a client that sends `headers` with every request
    pub fn with_headers(service: &'static str, headers: HeaderMap) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .with_context(|| format!("Failed to build HTTP client for {}", service))?;

        Ok(Self {
            client,
            service,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Overrides the number of attempts per request (at least one)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    /// GETs `url` and decodes the JSON body
    ///
    /// # Returns
    /// `Ok(None)` on 404, the decoded body on success
    ///
    /// # Errors
    /// `StatsError::ApiError` for other status codes and transport failures
    /// (after retries), and a parse error for malformed bodies
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.try_get_json(url).await {
                Ok(result) => return Ok(result),
                Err(AttemptError::Permanent(e)) => return Err(e),
                Err(AttemptError::Transient(e)) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| self.api_error(url, "no attempt was made".to_string())))
    }

    /// Whether `url` answers with a success status, checked with a HEAD request
    pub async fn exists(&self, url: &str) -> Result<bool> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| self.api_error(url, e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(self.api_error(url, format!("status {}", status))),
        }
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<Option<T>, AttemptError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AttemptError::Transient(self.api_error(url, e.to_string())))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AttemptError::Transient(
                self.api_error(url, format!("status {}", status)),
            ));
        }
        if !status.is_success() {
            return Err(AttemptError::Permanent(
                self.api_error(url, format!("status {}", status)),
            ));
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .with_context(|| format!("Failed to parse {} response from {}", self.service, url))
            .map_err(AttemptError::Permanent)
    }

    fn api_error(&self, url: &str, details: String) -> anyhow::Error {
        StatsError::ApiError {
            service: self.service.to_string(),
            url: url.to_string(),
            details,
        }
        .into()
    }
}

/// Joins a configured base URL and a path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
