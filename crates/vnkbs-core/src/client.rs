use std::sync::Arc;

use crate::config::ClientConfig;
use crate::domain::Symbol;
use crate::executor::RequestExecutor;
use crate::http_client::{HttpClient, HttpError};
use crate::services::{CompanyService, FinanceService, ListingService, QuoteService, TradingService};
use crate::ValidationError;

/// Entry point to the KBS market-data API.
///
/// Holds one pooled transport shared by every facade it hands out. The
/// market-wide facades are built once at construction; the per-symbol ones
/// are cheap and built on demand.
#[derive(Debug, Clone)]
pub struct KbsClient {
    executor: RequestExecutor,
    listing: ListingService,
    trading: TradingService,
}

impl KbsClient {
    /// Client over the pooled `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let executor = RequestExecutor::with_reqwest(Arc::new(config))?;
        Ok(Self::from_executor(executor))
    }

    /// Client over a caller-supplied transport.
    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self::from_executor(RequestExecutor::new(http_client, Arc::new(config)))
    }

    pub fn from_executor(executor: RequestExecutor) -> Self {
        Self {
            listing: ListingService::new(executor.clone()),
            trading: TradingService::new(executor.clone()),
            executor,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    pub fn listing(&self) -> &ListingService {
        &self.listing
    }

    pub fn trading(&self) -> &TradingService {
        &self.trading
    }

    pub fn quote(&self, symbol: &str) -> Result<QuoteService, ValidationError> {
        Ok(QuoteService::new(self.executor.clone(), Symbol::parse(symbol)?))
    }

    pub fn company(&self, symbol: &str) -> Result<CompanyService, ValidationError> {
        Ok(CompanyService::new(self.executor.clone(), Symbol::parse(symbol)?))
    }

    pub fn finance(&self, symbol: &str) -> Result<FinanceService, ValidationError> {
        Ok(FinanceService::new(self.executor.clone(), Symbol::parse(symbol)?))
    }
}
