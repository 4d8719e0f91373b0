//! Logical request description and its translation to the wire.

use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::http_client::{HttpMethod, HttpRequest};

pub const ACCEPT: &str = "application/json";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,vi;q=0.8";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Request payload for non-GET calls. Every provider POST takes a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Map<String, Value>),
}

impl RequestBody {
    pub fn json_object<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Json(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => JSON_CONTENT_TYPE,
        }
    }

    fn encode(&self) -> String {
        match self {
            Self::Json(object) => Value::Object(object.clone()).to_string(),
        }
    }
}

/// One upstream call as the facades describe it: verb, resolved URL, ordered
/// query parameters with unique keys, optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: HttpMethod,
    url: String,
    query: Vec<(String, Option<String>)>,
    body: Option<RequestBody>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Sets a query parameter. Re-setting a key replaces its value in place,
    /// so the first position is kept.
    pub fn with_query(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.with_optional_query(key, Some(value))
    }

    /// Sets a query parameter that is dropped from the wire when `None`.
    pub fn with_optional_query<T: ToString>(
        mut self,
        key: impl Into<String>,
        value: Option<T>,
    ) -> Self {
        let key = key.into();
        let value = value.map(|v| v.to_string());
        match self.query.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query(&self) -> &[(String, Option<String>)] {
        &self.query
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Percent-encoded query string, `None`-valued parameters removed.
    pub fn encoded_query(&self) -> String {
        encode_pairs(
            self.query
                .iter()
                .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v))),
        )
    }

    /// URL with the encoded query string appended.
    pub fn full_url(&self) -> String {
        let query = self.encoded_query();
        if query.is_empty() {
            self.url.clone()
        } else if self.url.contains('?') {
            format!("{}&{}", self.url, query)
        } else {
            format!("{}?{}", self.url, query)
        }
    }

    /// Builds the wire request with the provider's fixed header set.
    pub fn to_http_request(&self, config: &ClientConfig) -> HttpRequest {
        let mut request = HttpRequest::new(self.method, self.full_url())
            .with_header("accept", ACCEPT)
            .with_header("accept-language", ACCEPT_LANGUAGE)
            .with_header("user-agent", config.user_agent())
            .with_header("x-lang", config.language().header_value());

        if let Some(body) = &self.body {
            request = request
                .with_header("content-type", body.content_type())
                .with_body(body.encode());
        }

        request
    }
}

fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
