use crate::core::errors::ClientError;
use crate::core::types::{HttpMethod, RequestDescriptor};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{instrument, trace};

/// REST client trait for executing prepared requests
///
/// The descriptor already carries the full signed URL, so implementations
/// only dispatch the verb and decode the response. Keeping this seam
/// trait-based lets tests substitute a canned transport.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Execute a request and return the decoded JSON body
    ///
    /// Transport failures are surfaced to the caller unmodified; nothing at
    /// this layer retries.
    async fn execute(&self, request: &RequestDescriptor) -> Result<Value, ClientError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "StratusX/1.0".to_string(),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    #[must_use]
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone, Debug)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl ReqwestRest {
    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ClientError> {
        let status = response.status();
        let response_text = response.text().await?;

        trace!("response body: {}", response_text);

        if status.is_success() {
            Ok(serde_json::from_str(&response_text)?)
        } else {
            Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body: response_text,
            })
        }
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, request), fields(method = %request.method, user_agent = %self.config.user_agent))]
    async fn execute(&self, request: &RequestDescriptor) -> Result<Value, ClientError> {
        // Signed parameters always travel in the URL; POST carries no body.
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        let response = builder.send().await?;
        self.handle_response(response).await
    }
}
