//! Client configuration.
//!
//! [`ClientConfig`] is built once and shared read-only (behind an `Arc`) by
//! every request the client issues.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use crate::ValidationError;

pub const DEFAULT_BASE_URL_IIS: &str = "https://kbbuddywts.kbsec.com.vn/iis-server/investment";
pub const DEFAULT_BASE_URL_SAS: &str = "https://kbbuddywts.kbsec.com.vn/sas";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_USER_AGENT: &str = "VNStock-Rust-KBS/0.1.0";

/// Response language requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Vietnamese,
    English,
}

impl Language {
    /// Numeric code sent in the `l` / `languageid` query parameters.
    pub const fn code(self) -> u8 {
        match self {
            Self::Vietnamese => 1,
            Self::English => 2,
        }
    }

    /// Value of the `x-lang` request header.
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::Vietnamese => "vi",
            Self::English => "en",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Vietnamese => Self::English,
            Self::English => Self::Vietnamese,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header_value())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vi" | "1" => Ok(Self::Vietnamese),
            "en" | "2" => Ok(Self::English),
            other => Err(ValidationError::InvalidLanguage {
                value: other.to_owned(),
            }),
        }
    }
}

/// Immutable settings shared by all requests of one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url_iis: String,
    base_url_sas: String,
    connect_timeout: Duration,
    read_timeout: Duration,
    max_retries: u32,
    user_agent: String,
    language: Language,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url_iis: DEFAULT_BASE_URL_IIS.to_owned(),
            base_url_sas: DEFAULT_BASE_URL_SAS.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            language: Language::default(),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Reads overrides from `VNKBS_*` environment variables.
    ///
    /// Unset variables keep their defaults; a set but malformed variable is an
    /// error rather than being ignored.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(value) = lookup("VNKBS_BASE_URL_IIS") {
            builder = builder.base_url_iis(value);
        }
        if let Some(value) = lookup("VNKBS_BASE_URL_SAS") {
            builder = builder.base_url_sas(value);
        }
        if let Some(value) = lookup("VNKBS_CONNECT_TIMEOUT_SECS") {
            builder = builder.connect_timeout(parse_seconds("VNKBS_CONNECT_TIMEOUT_SECS", &value)?);
        }
        if let Some(value) = lookup("VNKBS_READ_TIMEOUT_SECS") {
            builder = builder.read_timeout(parse_seconds("VNKBS_READ_TIMEOUT_SECS", &value)?);
        }
        if let Some(value) = lookup("VNKBS_MAX_RETRIES") {
            let retries = value
                .trim()
                .parse::<u32>()
                .map_err(|_| ValidationError::InvalidConfig {
                    key: "VNKBS_MAX_RETRIES",
                    value: value.clone(),
                    reason: "expected a non-negative integer",
                })?;
            builder = builder.max_retries(retries);
        }
        if let Some(value) = lookup("VNKBS_USER_AGENT") {
            builder = builder.user_agent(value);
        }
        if let Some(value) = lookup("VNKBS_LANGUAGE") {
            builder = builder.language(value.parse()?);
        }

        builder.build()
    }

    pub fn base_url_iis(&self) -> &str {
        &self.base_url_iis
    }

    pub fn base_url_sas(&self) -> &str {
        &self.base_url_sas
    }

    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Total attempt budget for one logical call, first attempt included.
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub(crate) fn iis_url(&self, path: &str) -> String {
        join_url(&self.base_url_iis, path)
    }

    pub(crate) fn sas_url(&self, path: &str) -> String {
        join_url(&self.base_url_sas, path)
    }
}

/// Builder for [`ClientConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn base_url_iis(mut self, url: impl Into<String>) -> Self {
        self.config.base_url_iis = url.into();
        self
    }

    pub fn base_url_sas(mut self, url: impl Into<String>) -> Self {
        self.config.base_url_sas = url.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    pub fn build(self) -> Result<ClientConfig, ValidationError> {
        let config = self.config;

        if config.max_retries == 0 {
            return Err(ValidationError::InvalidConfig {
                key: "max_retries",
                value: String::from("0"),
                reason: "at least one attempt is required",
            });
        }
        for (key, url) in [
            ("base_url_iis", &config.base_url_iis),
            ("base_url_sas", &config.base_url_sas),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ValidationError::InvalidConfig {
                    key,
                    value: url.clone(),
                    reason: "expected an http(s) URL",
                });
            }
        }
        if config.user_agent.trim().is_empty() {
            return Err(ValidationError::InvalidConfig {
                key: "user_agent",
                value: config.user_agent.clone(),
                reason: "must not be blank",
            });
        }

        Ok(config)
    }
}

fn parse_seconds(key: &'static str, value: &str) -> Result<Duration, ValidationError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ValidationError::InvalidConfig {
            key,
            value: value.to_owned(),
            reason: "expected whole seconds",
        })
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
