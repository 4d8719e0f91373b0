//! # vnkbs Core
//!
//! Client library for the KBS Vietnamese equity market-data API.
//!
//! ## Overview
//!
//! This crate turns the provider's undocumented JSON endpoints into a
//! normalized, strongly-typed domain model:
//!
//! - **Endpoint catalog** mapping intervals, groups, industries and report
//!   types to upstream tokens
//! - **Request executor** with a bounded, linear-backoff retry loop
//! - **Tolerant decoder** for inconsistent upstream encodings
//! - **Normalizer** for scaled prices and the provider's date formats
//! - **Service facades** for listings, quotes, companies, finance and trading
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Static lookup tables, no I/O |
//! | [`client`] | [`KbsClient`] entry point |
//! | [`config`] | Immutable client configuration |
//! | [`decode`] | JSON decoding helpers |
//! | [`domain`] | Normalized domain values |
//! | [`error`] | Error taxonomy |
//! | [`executor`] | Retrying request executor |
//! | [`http_client`] | Transport abstraction and `reqwest` transport |
//! | [`normalize`] | Price scaling and timestamp parsers |
//! | [`request`] | Request descriptors and wire headers |
//! | [`retry`] | Backoff schedule and attempt accounting |
//! | [`services`] | Listing, quote, company, finance and trading facades |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use time::macros::date;
//! use vnkbs_core::{ClientConfig, KbsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KbsClient::new(ClientConfig::from_env()?)?;
//!
//!     let bars = client
//!         .quote("VNM")?
//!         .history(date!(2024 - 01 - 01), date!(2024 - 01 - 31), "1d")
//!         .await?;
//!     for bar in bars {
//!         println!("{} close={}", bar.time, bar.close);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Service facade │──── resolve ───▶ Endpoint catalog
//! └────────┬────────┘
//!          │ RequestDescriptor
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ RequestExecutor │────▶│ HttpClient       │
//! │ (retry/backoff) │     │ (reqwest/mock)   │
//! └────────┬────────┘     └──────────────────┘
//!          │ RawBody
//!          ▼
//! ┌─────────────────┐
//! │ Decoder         │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │ Normalizer      │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`], whose [`kind`](ApiError::kind) is
//! stable through any context a facade adds:
//!
//! ```rust
//! use vnkbs_core::{ApiError, ErrorKind};
//!
//! fn describe(error: &ApiError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::Transport => "network failure after all retries",
//!         ErrorKind::Status => "upstream rejected the request",
//!         ErrorKind::Decode => "unexpected response shape",
//!         ErrorKind::Validation => "bad input, nothing was sent",
//!     }
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod decode;
pub mod domain;
pub mod error;
pub mod executor;
pub mod http_client;
pub mod normalize;
pub mod request;
pub mod retry;
pub mod services;

pub use catalog::{HistoryRoute, Interval, MarketGroup, ReportPeriod, ReportType};
pub use client::KbsClient;
pub use config::{ClientConfig, ClientConfigBuilder, Language};
pub use domain::{
    CharterCapitalEntry, CompanyEvent, CompanyProfile, FinancialItem, FinancialReport,
    HistoricalPrice, IndustryInfo, IndustryStock, InsiderTrade, IntradayTrade, Leader, NewsItem,
    Ownership, PriceBoardEntry, PriceLevel, Shareholder, StockSymbol, Subsidiary, Symbol,
    TradeSide,
};
pub use error::{ApiError, DecodeError, ErrorKind, ValidationError};
pub use executor::{RawBody, RequestExecutor};
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use request::{RequestBody, RequestDescriptor};
pub use retry::{Backoff, RetryState};
pub use services::{CompanyService, FinanceService, ListingService, QuoteService, TradingService};
