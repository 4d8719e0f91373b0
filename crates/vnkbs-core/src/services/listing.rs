use tracing::debug;

use crate::catalog::{industry_name, MarketGroup};
use crate::decode::records::{RawIndustry, RawIndustryStock};
use crate::domain::{IndustryInfo, IndustryStock, StockSymbol};
use crate::executor::RequestExecutor;
use crate::normalize::{normalize_industry, normalize_industry_stock, normalize_symbol};
use crate::request::RequestDescriptor;
use crate::ApiError;

use super::{fetch_keyed, fetch_many};

/// Market-wide listings: symbols, group membership and industries.
#[derive(Debug, Clone)]
pub struct ListingService {
    executor: RequestExecutor,
}

impl ListingService {
    pub fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    /// Every listed security whose type is `stock`.
    pub async fn all_symbols(&self) -> Result<Vec<StockSymbol>, ApiError> {
        let listings = self.all_listings().await?;
        Ok(listings.into_iter().filter(StockSymbol::is_stock).collect())
    }

    /// Every listed security: stocks, funds, warrants and bonds.
    pub async fn all_listings(&self) -> Result<Vec<StockSymbol>, ApiError> {
        debug!("fetching symbol listing");
        let descriptor =
            RequestDescriptor::get(self.executor.config().iis_url("/stock/search/data"));
        fetch_many(&self.executor, &descriptor, normalize_symbol)
            .await
            .map_err(|error| error.with_context("symbol listing"))
    }

    /// Constituents of a market group such as `VN30` or `HOSE`.
    pub async fn symbols_by_group(&self, group: &str) -> Result<Vec<String>, ApiError> {
        let group = MarketGroup::resolve(group)?;
        debug!(group = %group, token = group.token(), "fetching group constituents");

        let path = format!("/index/{}/stocks", group.token());
        let descriptor = RequestDescriptor::get(self.executor.config().iis_url(&path));
        fetch_keyed(&self.executor, &descriptor, "data", |symbol: String| Ok(symbol))
            .await
            .map_err(|error| error.with_context(format!("constituents of group {group}")))
    }

    /// Group names with their descriptions. No I/O.
    pub fn supported_groups(&self) -> Vec<(&'static str, &'static str)> {
        MarketGroup::descriptions()
    }

    pub async fn all_industries(&self) -> Result<Vec<IndustryInfo>, ApiError> {
        debug!("fetching industries");
        let descriptor = RequestDescriptor::get(self.executor.config().iis_url("/sector/all"));
        fetch_many(&self.executor, &descriptor, |raw: RawIndustry| {
            Ok(normalize_industry(raw))
        })
        .await
        .map_err(|error| error.with_context("industry list"))
    }

    /// Members of one industry. The code must be in the industry table.
    pub async fn symbols_by_industry(&self, code: u32) -> Result<Vec<IndustryStock>, ApiError> {
        let name = industry_name(code)?;
        debug!(code, industry = name, "fetching industry members");

        let config = self.executor.config();
        let descriptor = RequestDescriptor::get(config.iis_url("/sector/stock"))
            .with_query("code", code)
            .with_query("l", config.language().code());
        fetch_keyed(&self.executor, &descriptor, "stocks", |raw: RawIndustryStock| {
            Ok(normalize_industry_stock(raw))
        })
        .await
        .map_err(|error| error.with_context(format!("members of industry {code}")))
    }

    pub async fn all_etf(&self) -> Result<Vec<String>, ApiError> {
        self.symbols_by_group(MarketGroup::Etf.name()).await
    }

    pub async fn all_bonds(&self) -> Result<Vec<String>, ApiError> {
        self.symbols_by_group(MarketGroup::Bond.name()).await
    }

    pub async fn all_futures(&self) -> Result<Vec<String>, ApiError> {
        self.symbols_by_group(MarketGroup::Futures.name()).await
    }

    pub async fn all_covered_warrants(&self) -> Result<Vec<String>, ApiError> {
        self.symbols_by_group(MarketGroup::CoveredWarrant.name()).await
    }
}
