use time::Date;
use tracing::debug;

use crate::catalog::{HistoryRoute, Interval};
use crate::domain::{HistoricalPrice, IntradayTrade, Symbol};
use crate::executor::RequestExecutor;
use crate::normalize::{format_query_date, normalize_bar, normalize_trade};
use crate::request::RequestDescriptor;
use crate::{ApiError, ValidationError};

use super::{fetch_keyed, require_positive};

/// Historical bars and the intraday tape for one symbol.
#[derive(Debug, Clone)]
pub struct QuoteService {
    executor: RequestExecutor,
    symbol: Symbol,
}

impl QuoteService {
    pub fn new(executor: RequestExecutor, symbol: Symbol) -> Self {
        Self { executor, symbol }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// OHLCV bars between `start` and `end` inclusive.
    ///
    /// `interval` accepts any catalog token or alias (`1d`, `daily`, `1h`,
    /// ...). Index symbols such as `VNINDEX` are served by the index
    /// endpoints, everything else by the equity ones.
    pub async fn history(
        &self,
        start: Date,
        end: Date,
        interval: &str,
    ) -> Result<Vec<HistoricalPrice>, ApiError> {
        let interval = Interval::resolve(interval)?;
        if start > end {
            return Err(ValidationError::InvertedDateRange {
                start: start.to_string(),
                end: end.to_string(),
            }
            .into());
        }

        let route = HistoryRoute::for_symbol(self.symbol.as_str());
        debug!(
            symbol = %self.symbol,
            interval = %interval,
            route = route.path_segment(),
            "fetching historical prices"
        );

        let path = format!(
            "/{}/{}/data_{}",
            route.path_segment(),
            self.symbol,
            interval.suffix()
        );
        let descriptor = RequestDescriptor::get(self.executor.config().iis_url(&path))
            .with_query("sdate", format_query_date(start))
            .with_query("edate", format_query_date(end));
        let key = format!("data_{}", interval.suffix());

        fetch_keyed(&self.executor, &descriptor, &key, normalize_bar)
            .await
            .map_err(|error| {
                error.with_context(format!("historical prices for {}", self.symbol))
            })
    }

    /// One page of matched trades, most recent first.
    pub async fn intraday(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<IntradayTrade>, ApiError> {
        let page = require_positive("page", page)?;
        let page_size = require_positive("page_size", page_size)?;
        debug!(symbol = %self.symbol, page, page_size, "fetching intraday trades");

        let path = format!("/trade/history/{}", self.symbol);
        let descriptor = RequestDescriptor::get(self.executor.config().iis_url(&path))
            .with_query("page", page)
            .with_query("limit", page_size);

        fetch_keyed(&self.executor, &descriptor, "data", normalize_trade)
            .await
            .map_err(|error| error.with_context(format!("intraday trades for {}", self.symbol)))
    }
}
