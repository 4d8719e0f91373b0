//! Scripted transport shared by the behavior tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use vnkbs_core::{
    Backoff, ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse, KbsClient, Language,
    RequestExecutor,
};

pub const IIS: &str = "https://iis.test/iis-server/investment";
pub const SAS: &str = "https://sas.test/sas";

/// Replays canned responses in order and records every request it sees.
/// Once the script runs out every further call fails as a transport error.
pub struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// One 200 response per body.
    pub fn ok(bodies: &[&str]) -> Arc<Self> {
        Self::new(
            bodies
                .iter()
                .map(|body| Ok(HttpResponse::ok_json(*body)))
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .len()
    }

    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        let next = self
            .responses
            .lock()
            .expect("script should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::new("script exhausted")));
        Box::pin(async move { next })
    }
}

pub fn config(language: Language) -> ClientConfig {
    ClientConfig::builder()
        .base_url_iis(IIS)
        .base_url_sas(SAS)
        .language(language)
        .build()
        .expect("test config should build")
}

pub fn executor(transport: Arc<ScriptedHttpClient>, max_retries: u32) -> RequestExecutor {
    executor_with_backoff(transport, max_retries, Backoff::none())
}

pub fn executor_with_backoff(
    transport: Arc<ScriptedHttpClient>,
    max_retries: u32,
    backoff: Backoff,
) -> RequestExecutor {
    let config = ClientConfig::builder()
        .base_url_iis(IIS)
        .base_url_sas(SAS)
        .max_retries(max_retries)
        .build()
        .expect("test config should build");
    RequestExecutor::new(transport, Arc::new(config)).with_backoff(backoff)
}

/// Client over `transport` with zero-delay retries.
pub fn client(transport: Arc<ScriptedHttpClient>) -> KbsClient {
    client_with_language(transport, Language::Vietnamese)
}

pub fn client_with_language(transport: Arc<ScriptedHttpClient>, language: Language) -> KbsClient {
    let executor =
        RequestExecutor::new(transport, Arc::new(config(language))).with_backoff(Backoff::none());
    KbsClient::from_executor(executor)
}

/// Query string of a recorded request URL, without the leading `?`.
pub fn query_of(request: &HttpRequest) -> &str {
    request
        .url
        .split_once('?')
        .map(|(_, query)| query)
        .unwrap_or("")
}

/// URL of a recorded request without its query string.
pub fn path_of(request: &HttpRequest) -> &str {
    request
        .url
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(&request.url)
}
