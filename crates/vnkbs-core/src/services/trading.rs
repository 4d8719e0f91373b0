use tracing::debug;

use crate::domain::{PriceBoardEntry, Symbol};
use crate::executor::RequestExecutor;
use crate::normalize::normalize_board_entry;
use crate::request::{RequestBody, RequestDescriptor};
use crate::ApiError;

use super::fetch_many;

/// Real-time price board.
#[derive(Debug, Clone)]
pub struct TradingService {
    executor: RequestExecutor,
}

impl TradingService {
    pub fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    /// Board snapshot for every symbol in `symbols`.
    ///
    /// Symbols are validated and upper-cased before the request; an empty
    /// list is rejected. Unknown symbols are simply absent from the result.
    pub async fn price_board<I, S>(&self, symbols: I) -> Result<Vec<PriceBoardEntry>, ApiError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols = Symbol::parse_list(symbols)?;
        let codes = symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",");
        debug!(symbols = %codes, "fetching price board");

        // Read-only despite the verb; safe to retry.
        let descriptor = RequestDescriptor::post(self.executor.config().iis_url("/stock/iss"))
            .with_body(RequestBody::json_object([("code", codes.as_str())]));

        fetch_many(&self.executor, &descriptor, normalize_board_entry)
            .await
            .map_err(|error| error.with_context(format!("price board for {codes}")))
    }

    /// Board entry for one symbol, `None` when the board has no row for it.
    pub async fn price(&self, symbol: &str) -> Result<Option<PriceBoardEntry>, ApiError> {
        let entries = self.price_board([symbol]).await?;
        Ok(entries.into_iter().next())
    }
}
