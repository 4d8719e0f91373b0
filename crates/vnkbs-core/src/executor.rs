//! The single choke point for upstream calls.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::http_client::{HttpClient, HttpError, ReqwestHttpClient};
use crate::request::RequestDescriptor;
use crate::retry::{Backoff, RetryState};
use crate::ApiError;

/// Body of a successful (2xx) exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBody {
    /// The provider answered 2xx with an empty or absent body.
    Empty,
    Text(String),
}

impl RawBody {
    fn from_text(body: String) -> Self {
        if body.is_empty() {
            Self::Empty
        } else {
            Self::Text(body)
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Executes [`RequestDescriptor`]s against a shared transport with a bounded
/// retry loop. Cheap to clone; clones share the transport and configuration.
#[derive(Clone)]
pub struct RequestExecutor {
    http_client: Arc<dyn HttpClient>,
    config: Arc<ClientConfig>,
    backoff: Backoff,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("config", &self.config)
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}

impl RequestExecutor {
    pub fn new(http_client: Arc<dyn HttpClient>, config: Arc<ClientConfig>) -> Self {
        Self {
            http_client,
            config,
            backoff: Backoff::default(),
        }
    }

    /// Executor over the pooled `reqwest` transport.
    pub fn with_reqwest(config: Arc<ClientConfig>) -> Result<Self, HttpError> {
        let transport = ReqwestHttpClient::from_config(&config)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Executes with the configured attempt budget.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<RawBody, ApiError> {
        self.execute_with_retries(descriptor, self.config.max_retries())
            .await
    }

    /// Executes `descriptor`, making at most `max_retries` attempts.
    ///
    /// Only transport failures are retried. A completed exchange with a
    /// non-2xx status fails immediately with [`ApiError::Status`].
    pub async fn execute_with_retries(
        &self,
        descriptor: &RequestDescriptor,
        max_retries: u32,
    ) -> Result<RawBody, ApiError> {
        let max_attempts = max_retries.max(1);
        let request = descriptor.to_http_request(&self.config);
        let mut state = RetryState::new();

        while state.has_remaining(max_attempts) {
            let attempt = state.begin_attempt();
            debug!(
                method = %request.method,
                url = %request.url,
                attempt,
                "sending upstream request"
            );

            match self.http_client.execute(request.clone()).await {
                Ok(response) => {
                    debug!(url = %request.url, status = response.status, attempt, "upstream responded");
                    if !response.is_success() {
                        let body = (!response.body.is_empty()).then_some(response.body);
                        return Err(ApiError::Status {
                            url: request.url,
                            status: response.status,
                            body,
                        });
                    }
                    return Ok(RawBody::from_text(response.body));
                }
                Err(error) => {
                    warn!(url = %request.url, attempt, error = %error, "request attempt failed");
                    let retryable = error.retryable();
                    state.record_failure(error);

                    if !retryable {
                        break;
                    }
                    if state.has_remaining(max_attempts) {
                        tokio::time::sleep(self.backoff.delay(attempt)).await;
                    }
                }
            }
        }

        let attempts = state.attempt();
        let source = state
            .into_last_failure()
            .unwrap_or_else(|| HttpError::non_retryable("no attempt was made"));
        Err(ApiError::Transport {
            url: request.url,
            attempts,
            source,
        })
    }
}
