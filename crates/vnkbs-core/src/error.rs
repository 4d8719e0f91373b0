//! Error taxonomy for the request pipeline.
//!
//! Four kinds of failure reach callers, each as a distinct [`ApiError`]
//! variant:
//!
//! | Kind | Raised by | Retried |
//! |------|-----------|---------|
//! | [`ErrorKind::Transport`] | executor, after the attempt budget is spent | yes, up to `max_retries` |
//! | [`ErrorKind::Status`] | executor, on a non-2xx exchange | never |
//! | [`ErrorKind::Decode`] | decoder / normalizer | never |
//! | [`ErrorKind::Validation`] | catalog / facades, before any I/O | never |

use thiserror::Error;

use crate::http_client::HttpError;

/// Caller-supplied input that the catalog or a facade rejected before any
/// network call was issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid interval '{value}', expected one of {valid}")]
    InvalidInterval { value: String, valid: String },
    #[error("invalid group '{value}', expected one of {valid}")]
    InvalidGroup { value: String, valid: String },
    #[error("invalid report type '{value}', expected one of {valid}")]
    InvalidReportType { value: String, valid: String },
    #[error("invalid report period '{value}', expected one of year, quarter")]
    InvalidReportPeriod { value: String },
    #[error("unknown industry code {code}, expected one of {valid}")]
    InvalidIndustryCode { code: u32, valid: String },
    #[error("unknown event type {code}, expected one of {valid}")]
    InvalidEventType { code: u32, valid: String },
    #[error("invalid language '{value}', expected one of vi, en, 1, 2")]
    InvalidLanguage { value: String },

    #[error("symbol list cannot be empty")]
    EmptySymbolList,
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: String, end: String },

    #[error("configuration value {key}='{value}' is invalid: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// A response body that is present but cannot be turned into the expected
/// shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("field '{field}' has malformed value '{value}'")]
    MalformedField { field: &'static str, value: String },

    #[error("'{value}' does not match the {format} format")]
    Timestamp { value: String, format: &'static str },
}

/// Root classification of an [`ApiError`], stable through context layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Status,
    Decode,
    Validation,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Decode => "decode",
            Self::Validation => "validation",
        }
    }
}

/// Error returned by every public operation of the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// All attempts failed before an HTTP exchange completed.
    #[error("request to {url} failed after {attempts} attempt(s): {source}")]
    Transport {
        url: String,
        attempts: u32,
        #[source]
        source: HttpError,
    },

    /// The exchange completed with a non-2xx status.
    #[error("upstream returned status {status} for {url}")]
    Status {
        url: String,
        status: u16,
        body: Option<String>,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Domain context added by a facade; the wrapped error keeps its kind.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ApiError>,
    },
}

impl ApiError {
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any [`ApiError::Context`] layers.
    pub fn root(&self) -> &ApiError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Context { source, .. } => source.kind(),
        }
    }

    /// HTTP status of a completed exchange, absent for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a completed exchange, when one was sent.
    pub fn body(&self) -> Option<&str> {
        match self.root() {
            Self::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Number of attempts made before a transport failure became terminal.
    pub fn attempts(&self) -> Option<u32> {
        match self.root() {
            Self::Transport { attempts, .. } => Some(*attempts),
            _ => None,
        }
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self.root() {
            Self::Validation(error) => Some(error),
            _ => None,
        }
    }
}
