use tracing::debug;

use crate::catalog::event_type_name;
use crate::decode::records::{RawEvent, RawInsiderTrade, RawNews, RawProfile};
use crate::domain::{
    CharterCapitalEntry, CompanyEvent, CompanyProfile, InsiderTrade, Leader, NewsItem, Ownership,
    Shareholder, Subsidiary, Symbol,
};
use crate::executor::RequestExecutor;
use crate::normalize::{normalize_event, normalize_insider_trade, normalize_news, normalize_profile};
use crate::request::RequestDescriptor;
use crate::ApiError;

use super::{fetch_many, fetch_one, require_positive};

/// Profile, filings and news for one company.
#[derive(Debug, Clone)]
pub struct CompanyService {
    executor: RequestExecutor,
    symbol: Symbol,
}

impl CompanyService {
    pub fn new(executor: RequestExecutor, symbol: Symbol) -> Self {
        Self { executor, symbol }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Full company profile, `None` when upstream has none for the symbol.
    pub async fn overview(&self) -> Result<Option<CompanyProfile>, ApiError> {
        debug!(symbol = %self.symbol, "fetching company profile");
        let config = self.executor.config();
        let path = format!("/stockinfo/profile/{}", self.symbol);
        let descriptor = RequestDescriptor::get(config.iis_url(&path))
            .with_query("l", config.language().code());

        fetch_one(&self.executor, &descriptor, |raw: RawProfile| {
            Ok(normalize_profile(raw))
        })
        .await
        .map_err(|error| error.with_context(format!("company profile for {}", self.symbol)))
    }

    pub async fn officers(&self) -> Result<Vec<Leader>, ApiError> {
        Ok(self.overview().await?.map(|profile| profile.leaders).unwrap_or_default())
    }

    pub async fn shareholders(&self) -> Result<Vec<Shareholder>, ApiError> {
        Ok(self
            .overview()
            .await?
            .map(|profile| profile.shareholders)
            .unwrap_or_default())
    }

    pub async fn ownership(&self) -> Result<Vec<Ownership>, ApiError> {
        Ok(self.overview().await?.map(|profile| profile.ownership).unwrap_or_default())
    }

    pub async fn subsidiaries(&self) -> Result<Vec<Subsidiary>, ApiError> {
        Ok(self
            .overview()
            .await?
            .map(|profile| profile.subsidiaries)
            .unwrap_or_default())
    }

    pub async fn capital_history(&self) -> Result<Vec<CharterCapitalEntry>, ApiError> {
        Ok(self
            .overview()
            .await?
            .map(|profile| profile.charter_capital_history)
            .unwrap_or_default())
    }

    /// Corporate events, optionally restricted to one event type code.
    pub async fn events(
        &self,
        event_type: Option<u32>,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<CompanyEvent>, ApiError> {
        if let Some(code) = event_type {
            event_type_name(code)?;
        }
        let page = require_positive("page", page)?;
        let page_size = require_positive("page_size", page_size)?;
        debug!(symbol = %self.symbol, ?event_type, page, page_size, "fetching company events");

        let path = format!("/stockinfo/event/{}", self.symbol);
        let descriptor = self
            .paged(&path, page, page_size)
            .with_optional_query("eID", event_type);

        fetch_many(&self.executor, &descriptor, |raw: RawEvent| {
            Ok(normalize_event(raw))
        })
        .await
        .map_err(|error| error.with_context(format!("events for {}", self.symbol)))
    }

    pub async fn news(&self, page: u32, page_size: u32) -> Result<Vec<NewsItem>, ApiError> {
        let page = require_positive("page", page)?;
        let page_size = require_positive("page_size", page_size)?;
        debug!(symbol = %self.symbol, page, page_size, "fetching company news");

        let path = format!("/stockinfo/news/{}", self.symbol);
        let descriptor = self.paged(&path, page, page_size);

        fetch_many(&self.executor, &descriptor, |raw: RawNews| Ok(normalize_news(raw)))
            .await
            .map_err(|error| error.with_context(format!("news for {}", self.symbol)))
    }

    pub async fn insider_trading(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<InsiderTrade>, ApiError> {
        let page = require_positive("page", page)?;
        let page_size = require_positive("page_size", page_size)?;
        debug!(symbol = %self.symbol, page, page_size, "fetching insider trades");

        let path = format!("/stockinfo/news/internal-trading/{}", self.symbol);
        let descriptor = self.paged(&path, page, page_size);

        fetch_many(&self.executor, &descriptor, |raw: RawInsiderTrade| {
            Ok(normalize_insider_trade(raw))
        })
        .await
        .map_err(|error| error.with_context(format!("insider trades for {}", self.symbol)))
    }

    /// Paged filing request: language, page and page size.
    fn paged(&self, path: &str, page: u32, page_size: u32) -> RequestDescriptor {
        let config = self.executor.config();
        RequestDescriptor::get(config.iis_url(path))
            .with_query("l", config.language().code())
            .with_query("p", page)
            .with_query("s", page_size)
    }
}
