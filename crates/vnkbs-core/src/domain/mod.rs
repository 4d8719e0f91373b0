//! # Domain Models
//!
//! Normalized values returned by the service facades.
//!
//! ## Overview
//!
//! Every record is an immutable snapshot produced by the normalizer:
//!
//! - **Unscaled**: monetary fields are in currency units, never the
//!   provider's ×1000 integers
//! - **Typed dates**: bar, tick and filing timestamps are `time` values
//! - **Serializable**: full serde support for JSON
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockSymbol`] | Listed security with reference/ceiling/floor prices |
//! | [`HistoricalPrice`] | OHLCV bar |
//! | [`IntradayTrade`] | Matched trade from the intraday tape |
//! | [`PriceBoardEntry`] | Real-time board snapshot with three depth levels |
//! | [`CompanyProfile`] | Company profile and its nested lists |
//! | [`FinancialReport`] | Statement with period labels and line items |
//! | [`IndustryInfo`] / [`IndustryStock`] | Sector summary and members |
//! | [`CompanyEvent`] / [`NewsItem`] / [`InsiderTrade`] | Company filings |
//! | [`Symbol`] | Validated ticker |

mod models;
mod symbol;

pub use models::{
    CharterCapitalEntry, CompanyEvent, CompanyProfile, FinancialItem, FinancialReport,
    HistoricalPrice, IndustryInfo, IndustryStock, InsiderTrade, IntradayTrade, Leader, NewsItem,
    Ownership, PriceBoardEntry, PriceLevel, Shareholder, StockSymbol, Subsidiary, TradeSide,
    VIETNAM_OFFSET,
};
pub use symbol::Symbol;
