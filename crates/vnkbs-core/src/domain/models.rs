use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use time::macros::offset;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::catalog::{ReportPeriod, ReportType};
use crate::Symbol;

/// Exchange-local offset used for price-board timestamps.
pub const VIETNAM_OFFSET: UtcOffset = offset!(+7);

/// Listed security as returned by the symbol search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSymbol {
    pub symbol: String,
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub exchange: Option<String>,
    pub security_type: Option<String>,
    pub index: Option<i64>,
    pub reference_price: Option<Decimal>,
    pub ceiling_price: Option<Decimal>,
    pub floor_price: Option<Decimal>,
}

impl StockSymbol {
    /// Vietnamese name, falling back to the English one when blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.name_en.as_deref())
    }

    pub fn is_stock(&self) -> bool {
        self.security_type
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case("stock"))
    }
}

/// OHLCV bar. Prices are in currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    pub time: PrimitiveDateTime,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}

impl HistoricalPrice {
    pub fn price_change(&self) -> Decimal {
        self.close - self.open
    }

    /// Change relative to the open, in percent, rounded half-up to two
    /// places. Zero when the open is zero.
    pub fn price_change_percent(&self) -> Decimal {
        if self.open.is_zero() {
            return Decimal::ZERO;
        }
        (self.price_change() * Decimal::ONE_HUNDRED / self.open)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Aggressor side of a matched trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
    Unknown,
}

impl TradeSide {
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("B") => Self::Buy,
            Some("S") => Self::Sell,
            _ => Self::Unknown,
        }
    }
}

/// One matched trade from the intraday tape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradayTrade {
    pub symbol: Option<String>,
    pub timestamp: Option<PrimitiveDateTime>,
    pub trading_date: Option<Date>,
    pub time: Option<Time>,
    pub side: TradeSide,
    pub price: Option<Decimal>,
    pub price_change: Option<Decimal>,
    pub match_volume: Option<i64>,
    pub accumulated_volume: Option<i64>,
    /// Accumulated matched value as published, not rescaled.
    pub accumulated_value: Option<Decimal>,
}

impl IntradayTrade {
    pub fn is_buy(&self) -> bool {
        self.side == TradeSide::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.side == TradeSide::Sell
    }
}

/// One depth level of the board. Price is `None` for session markers such
/// as `ATO`/`ATC`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Option<Decimal>,
    pub volume: Option<i64>,
}

/// Real-time board snapshot for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBoardEntry {
    pub symbol: String,
    /// Epoch milliseconds of the last update.
    pub timestamp: Option<i64>,
    pub exchange: Option<String>,
    pub ceiling_price: Option<Decimal>,
    pub floor_price: Option<Decimal>,
    pub reference_price: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub close_price: Option<Decimal>,
    pub average_price: Option<Decimal>,
    pub total_trades: Option<i64>,
    pub total_value: Option<Decimal>,
    pub price_change: Option<Decimal>,
    pub percent_change: Option<Decimal>,
    /// Best three bids, best first.
    pub bids: Vec<PriceLevel>,
    /// Best three asks, best first.
    pub asks: Vec<PriceLevel>,
    pub foreign_buy_volume: Option<i64>,
    pub foreign_sell_volume: Option<i64>,
    pub foreign_buy_count: Option<i64>,
    pub foreign_sell_count: Option<i64>,
    pub put_through_quantity: Option<i64>,
    pub put_through_value: Option<Decimal>,
    pub total_listed_quantity: Option<i64>,
    pub listed_shares: Option<i64>,
    pub foreign_ownership_ratio: Option<Decimal>,
}

impl PriceBoardEntry {
    /// Last update as Vietnam local time.
    pub fn last_update(&self) -> Option<OffsetDateTime> {
        let millis = i128::from(self.timestamp?);
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000)
            .ok()
            .map(|instant| instant.to_offset(VIETNAM_OFFSET))
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().and_then(|level| level.price)
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().and_then(|level| level.price)
    }
}

/// Company profile with its five nested lists. Absent lists are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: Option<String>,
    pub business_model: Option<String>,
    pub founded_date: Option<String>,
    pub charter_capital: Option<Decimal>,
    pub employees: Option<i64>,
    pub listing_date: Option<String>,
    pub par_value: Option<Decimal>,
    pub exchange: Option<String>,
    pub listing_price: Option<Decimal>,
    pub listed_volume: Option<i64>,
    pub ceo_name: Option<String>,
    pub ceo_position: Option<String>,
    pub inspector_name: Option<String>,
    pub inspector_position: Option<String>,
    pub establishment_license: Option<String>,
    pub business_code: Option<String>,
    pub tax_id: Option<String>,
    pub auditor: Option<String>,
    pub company_type: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub free_float_percentage: Option<Decimal>,
    pub free_float: Option<i64>,
    pub outstanding_shares: Option<i64>,
    pub as_of_date: Option<String>,
    pub subsidiaries: Vec<Subsidiary>,
    pub leaders: Vec<Leader>,
    pub ownership: Vec<Ownership>,
    pub shareholders: Vec<Shareholder>,
    pub charter_capital_history: Vec<CharterCapitalEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsidiary {
    pub update_date: Option<String>,
    pub name: Option<String>,
    pub charter_capital: Option<Decimal>,
    pub ownership_percent: Option<Decimal>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub from_date: Option<String>,
    pub position: Option<String>,
    pub name: Option<String>,
    pub position_en: Option<String>,
    pub owner_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ownership {
    pub owner_type: Option<String>,
    pub ownership_percent: Option<Decimal>,
    pub shares: Option<i64>,
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shareholder {
    pub name: Option<String>,
    pub update_date: Option<String>,
    pub shares: Option<i64>,
    pub ownership_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharterCapitalEntry {
    pub date: Option<String>,
    pub charter_capital: Option<Decimal>,
    pub currency: Option<String>,
}

/// Financial statement for one symbol, report type and period kind.
///
/// `periods[i]` labels the `i`-th value column of every item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub symbol: Symbol,
    pub report_type: ReportType,
    pub period: ReportPeriod,
    pub periods: Vec<String>,
    /// Audit status code of each column, parallel to `periods`.
    pub period_audit: Vec<Option<String>>,
    /// Audit status code to description.
    pub audit_status: BTreeMap<String, String>,
    /// Unit code to description.
    pub units: BTreeMap<String, String>,
    pub items: Vec<FinancialItem>,
}

impl FinancialReport {
    pub fn item(&self, id: i64) -> Option<&FinancialItem> {
        self.items.iter().find(|item| item.id == Some(id))
    }

    /// Audit description of the column at `index`, through the audit table.
    pub fn period_audit_description(&self, index: usize) -> Option<&str> {
        let code = self.period_audit.get(index)?.as_deref()?;
        self.audit_status.get(code).map(String::as_str)
    }
}

/// One line of a financial statement with up to four period values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialItem {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub unit: Option<String>,
    pub level: Option<i64>,
    pub values: Vec<Option<Decimal>>,
}

impl FinancialItem {
    /// Value of the `index`-th period column.
    pub fn value(&self, index: usize) -> Option<Decimal> {
        self.values.get(index).copied().flatten()
    }
}

/// Industry sector summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryInfo {
    pub code: Option<i64>,
    pub name: Option<String>,
    pub change: Option<Decimal>,
}

/// Member of an industry with its current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryStock {
    pub symbol: Option<String>,
    pub price: Option<Decimal>,
    pub change: Option<Decimal>,
    pub volume: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyEvent {
    pub event_id: Option<i64>,
    pub symbol: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub event_date: Option<String>,
    pub event_type: Option<i64>,
    pub event_type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub article_id: Option<i64>,
    pub title: Option<String>,
    pub publish_time: Option<String>,
    pub url: Option<String>,
    pub head: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsiderTrade {
    pub event_id: Option<i64>,
    pub symbol: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub type_name: Option<String>,
    pub register_buy_volume: Option<i64>,
    pub buy_volume: Option<i64>,
    pub volume_before: Option<i64>,
    pub volume_after: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    fn bar(open: Decimal, close: Decimal) -> HistoricalPrice {
        HistoricalPrice {
            time: datetime!(2024-01-31 07:00),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn price_change_percent_rounds_half_up() {
        let up = bar(dec!(30.0), dec!(30.5));
        assert_eq!(up.price_change(), dec!(0.5));
        assert_eq!(up.price_change_percent(), dec!(1.67));

        let down = bar(dec!(80), dec!(78.4));
        assert_eq!(down.price_change_percent(), dec!(-2.00));

        assert_eq!(bar(Decimal::ZERO, dec!(5)).price_change_percent(), Decimal::ZERO);
    }

    #[test]
    fn display_name_falls_back_to_english() {
        let mut symbol = StockSymbol {
            symbol: String::from("VNM"),
            name: Some(String::from(" ")),
            name_en: Some(String::from("Vinamilk")),
            exchange: Some(String::from("HOSE")),
            security_type: Some(String::from("STOCK")),
            index: None,
            reference_price: None,
            ceiling_price: None,
            floor_price: None,
        };
        assert_eq!(symbol.display_name(), Some("Vinamilk"));
        assert!(symbol.is_stock());

        symbol.name = Some(String::from("Công ty Cổ phần Sữa Việt Nam"));
        assert_eq!(symbol.display_name(), Some("Công ty Cổ phần Sữa Việt Nam"));
    }

    #[test]
    fn last_update_is_vietnam_local_time() {
        let entry = PriceBoardEntry {
            symbol: String::from("VNM"),
            timestamp: Some(1_706_684_400_000),
            exchange: None,
            ceiling_price: None,
            floor_price: None,
            reference_price: None,
            open_price: None,
            high_price: None,
            low_price: None,
            close_price: None,
            average_price: None,
            total_trades: None,
            total_value: None,
            price_change: None,
            percent_change: None,
            bids: Vec::new(),
            asks: Vec::new(),
            foreign_buy_volume: None,
            foreign_sell_volume: None,
            foreign_buy_count: None,
            foreign_sell_count: None,
            put_through_quantity: None,
            put_through_value: None,
            total_listed_quantity: None,
            listed_shares: None,
            foreign_ownership_ratio: None,
        };

        let local = entry.last_update().expect("timestamp present");
        assert_eq!(local.offset(), VIETNAM_OFFSET);
        assert_eq!(local.date(), time::macros::date!(2024-01-31));
        assert_eq!(local.hour(), 14);
        assert_eq!(entry.best_bid(), None);
    }
}
