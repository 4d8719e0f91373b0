//! Intermediate shapes of the provider's JSON payloads.
//!
//! Field names follow the wire. Every field is optional here; the normalizer
//! decides which ones are required.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::{lenient_string, one_or_many, RawNumber};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSymbol {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "nameEn")]
    pub name_en: Option<String>,
    pub exchange: Option<String>,
    #[serde(rename = "type")]
    pub security_type: Option<String>,
    pub index: Option<RawNumber>,
    pub re: Option<RawNumber>,
    pub ceiling: Option<RawNumber>,
    pub floor: Option<RawNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawIndustry {
    pub name: Option<String>,
    pub code: Option<RawNumber>,
    pub change: Option<RawNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawIndustryStock {
    pub sb: Option<String>,
    pub pr: Option<RawNumber>,
    pub ch: Option<RawNumber>,
    pub vo: Option<RawNumber>,
}

/// One OHLCV bar. The enclosing object keys the list by `data_<suffix>`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawBar {
    pub t: Option<String>,
    pub o: Option<RawNumber>,
    pub h: Option<RawNumber>,
    pub l: Option<RawNumber>,
    pub c: Option<RawNumber>,
    pub v: Option<RawNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawTrade {
    pub t: Option<String>,
    #[serde(rename = "TD")]
    pub trading_date: Option<String>,
    #[serde(rename = "SB")]
    pub symbol: Option<String>,
    #[serde(rename = "FT")]
    pub time: Option<String>,
    #[serde(rename = "LC")]
    pub side: Option<String>,
    #[serde(rename = "FMP")]
    pub price: Option<RawNumber>,
    #[serde(rename = "FCV")]
    pub price_change: Option<RawNumber>,
    #[serde(rename = "FV")]
    pub match_volume: Option<RawNumber>,
    #[serde(rename = "AVO")]
    pub accumulated_volume: Option<RawNumber>,
    #[serde(rename = "AVA")]
    pub accumulated_value: Option<RawNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawBoardEntry {
    #[serde(rename = "SB")]
    pub symbol: Option<String>,
    pub t: Option<RawNumber>,
    #[serde(rename = "EX")]
    pub exchange: Option<String>,
    #[serde(rename = "CL")]
    pub ceiling: Option<RawNumber>,
    #[serde(rename = "FL")]
    pub floor: Option<RawNumber>,
    #[serde(rename = "RE")]
    pub reference: Option<RawNumber>,
    #[serde(rename = "OP")]
    pub open: Option<RawNumber>,
    #[serde(rename = "HI")]
    pub high: Option<RawNumber>,
    #[serde(rename = "LO")]
    pub low: Option<RawNumber>,
    #[serde(rename = "CP")]
    pub close: Option<RawNumber>,
    #[serde(rename = "AP")]
    pub average: Option<RawNumber>,
    #[serde(rename = "TT")]
    pub total_trades: Option<RawNumber>,
    #[serde(rename = "TV")]
    pub total_value: Option<RawNumber>,
    #[serde(rename = "CH")]
    pub change: Option<RawNumber>,
    #[serde(rename = "CHP")]
    pub change_percent: Option<RawNumber>,
    #[serde(rename = "B1")]
    pub bid_price_1: Option<RawNumber>,
    #[serde(rename = "V1")]
    pub bid_volume_1: Option<RawNumber>,
    #[serde(rename = "B2")]
    pub bid_price_2: Option<RawNumber>,
    #[serde(rename = "V2")]
    pub bid_volume_2: Option<RawNumber>,
    #[serde(rename = "B3")]
    pub bid_price_3: Option<RawNumber>,
    #[serde(rename = "V3")]
    pub bid_volume_3: Option<RawNumber>,
    #[serde(rename = "S1")]
    pub ask_price_1: Option<RawNumber>,
    #[serde(rename = "U1")]
    pub ask_volume_1: Option<RawNumber>,
    #[serde(rename = "S2")]
    pub ask_price_2: Option<RawNumber>,
    #[serde(rename = "U2")]
    pub ask_volume_2: Option<RawNumber>,
    #[serde(rename = "S3")]
    pub ask_price_3: Option<RawNumber>,
    #[serde(rename = "U3")]
    pub ask_volume_3: Option<RawNumber>,
    #[serde(rename = "FB")]
    pub foreign_buy_volume: Option<RawNumber>,
    #[serde(rename = "FR")]
    pub foreign_sell_volume: Option<RawNumber>,
    #[serde(rename = "FC")]
    pub foreign_buy_count: Option<RawNumber>,
    #[serde(rename = "FS")]
    pub foreign_sell_count: Option<RawNumber>,
    #[serde(rename = "PTQ")]
    pub put_through_quantity: Option<RawNumber>,
    #[serde(rename = "PTV")]
    pub put_through_value: Option<RawNumber>,
    #[serde(rename = "TLQ")]
    pub total_listed_quantity: Option<RawNumber>,
    #[serde(rename = "LS")]
    pub listed_shares: Option<RawNumber>,
    #[serde(rename = "FO")]
    pub foreign_ownership_ratio: Option<RawNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawProfile {
    #[serde(rename = "SB")]
    pub symbol: Option<String>,
    #[serde(rename = "SM")]
    pub business_model: Option<String>,
    #[serde(rename = "FD")]
    pub founded_date: Option<String>,
    #[serde(rename = "CC")]
    pub charter_capital: Option<RawNumber>,
    #[serde(rename = "HM")]
    pub employees: Option<RawNumber>,
    #[serde(rename = "LD")]
    pub listing_date: Option<String>,
    #[serde(rename = "FV")]
    pub par_value: Option<RawNumber>,
    #[serde(rename = "EX")]
    pub exchange: Option<String>,
    #[serde(rename = "LP")]
    pub listing_price: Option<RawNumber>,
    #[serde(rename = "VL")]
    pub listed_volume: Option<RawNumber>,
    #[serde(rename = "CTP")]
    pub ceo_name: Option<String>,
    #[serde(rename = "CTPP")]
    pub ceo_position: Option<String>,
    #[serde(rename = "IS")]
    pub inspector_name: Option<String>,
    #[serde(rename = "ISP")]
    pub inspector_position: Option<String>,
    #[serde(rename = "FP", default, deserialize_with = "lenient_string")]
    pub establishment_license: Option<String>,
    #[serde(rename = "BP", default, deserialize_with = "lenient_string")]
    pub business_code: Option<String>,
    #[serde(rename = "TC", default, deserialize_with = "lenient_string")]
    pub tax_id: Option<String>,
    #[serde(rename = "KT")]
    pub auditor: Option<String>,
    #[serde(rename = "TY")]
    pub company_type: Option<String>,
    #[serde(rename = "ADD")]
    pub address: Option<String>,
    #[serde(rename = "PHONE", default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(rename = "FAX", default, deserialize_with = "lenient_string")]
    pub fax: Option<String>,
    #[serde(rename = "EMAIL")]
    pub email: Option<String>,
    #[serde(rename = "URL")]
    pub website: Option<String>,
    #[serde(rename = "KLCPNY")]
    pub free_float_percentage: Option<RawNumber>,
    #[serde(rename = "SFV")]
    pub free_float: Option<RawNumber>,
    #[serde(rename = "KLCPLH")]
    pub outstanding_shares: Option<RawNumber>,
    #[serde(rename = "AD")]
    pub as_of_date: Option<String>,
    #[serde(rename = "Subsidiaries", default, deserialize_with = "one_or_many")]
    pub subsidiaries: Vec<RawSubsidiary>,
    #[serde(rename = "Leaders", default, deserialize_with = "one_or_many")]
    pub leaders: Vec<RawLeader>,
    #[serde(rename = "Ownership", default, deserialize_with = "one_or_many")]
    pub ownership: Vec<RawOwnership>,
    #[serde(rename = "Shareholders", default, deserialize_with = "one_or_many")]
    pub shareholders: Vec<RawShareholder>,
    #[serde(rename = "CharterCapital", default, deserialize_with = "one_or_many")]
    pub charter_capital_history: Vec<RawCharterCapital>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSubsidiary {
    #[serde(rename = "D")]
    pub update_date: Option<String>,
    #[serde(rename = "NM")]
    pub name: Option<String>,
    #[serde(rename = "CC")]
    pub charter_capital: Option<RawNumber>,
    #[serde(rename = "OR")]
    pub ownership_percent: Option<RawNumber>,
    #[serde(rename = "CR")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawLeader {
    #[serde(rename = "FD")]
    pub from_date: Option<String>,
    #[serde(rename = "PN")]
    pub position: Option<String>,
    #[serde(rename = "NM")]
    pub name: Option<String>,
    #[serde(rename = "PO")]
    pub position_en: Option<String>,
    #[serde(rename = "PI", default, deserialize_with = "lenient_string")]
    pub owner_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawOwnership {
    #[serde(rename = "NM")]
    pub owner_type: Option<String>,
    #[serde(rename = "OR")]
    pub ownership_percent: Option<RawNumber>,
    #[serde(rename = "SH")]
    pub shares: Option<RawNumber>,
    #[serde(rename = "D")]
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawShareholder {
    #[serde(rename = "NM")]
    pub name: Option<String>,
    #[serde(rename = "D")]
    pub update_date: Option<String>,
    #[serde(rename = "V")]
    pub shares: Option<RawNumber>,
    #[serde(rename = "OR")]
    pub ownership_percent: Option<RawNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCharterCapital {
    #[serde(rename = "D")]
    pub date: Option<String>,
    #[serde(rename = "V")]
    pub charter_capital: Option<RawNumber>,
    #[serde(rename = "C")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawEvent {
    #[serde(rename = "EventID")]
    pub event_id: Option<RawNumber>,
    pub stock_code: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub event_date: Option<String>,
    pub event_type: Option<RawNumber>,
    pub event_type_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawNews {
    #[serde(rename = "ArticleID")]
    pub article_id: Option<RawNumber>,
    pub title: Option<String>,
    pub publish_time: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub head: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawInsiderTrade {
    #[serde(rename = "EventID")]
    pub event_id: Option<RawNumber>,
    pub stock_code: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub type_name: Option<String>,
    pub register_buy_volume: Option<RawNumber>,
    pub buy_volume: Option<RawNumber>,
    pub volume_before: Option<RawNumber>,
    pub volume_after: Option<RawNumber>,
}

/// Financial statement payload. `Content` is kept as raw JSON keyed by
/// section name so only the requested section is parsed.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawFinance {
    #[serde(rename = "Audit", default, deserialize_with = "one_or_many")]
    pub audit: Vec<RawAudit>,
    #[serde(rename = "Unit", default, deserialize_with = "one_or_many")]
    pub unit: Vec<RawUnit>,
    #[serde(rename = "Head", default, deserialize_with = "one_or_many")]
    pub head: Vec<RawHead>,
    #[serde(rename = "Content", default)]
    pub content: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAudit {
    #[serde(rename = "AuditedStatusCode", default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawUnit {
    #[serde(rename = "UnitCode", default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawHead {
    #[serde(rename = "YearPeriod")]
    pub year: Option<RawNumber>,
    #[serde(rename = "TermName")]
    pub term_name: Option<String>,
    #[serde(rename = "TermNameEN")]
    pub term_name_en: Option<String>,
    #[serde(rename = "AuditedStatus", default, deserialize_with = "lenient_string")]
    pub audited_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawFinancialItem {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "NameEn")]
    pub name_en: Option<String>,
    #[serde(rename = "Unit", default, deserialize_with = "lenient_string")]
    pub unit: Option<String>,
    #[serde(rename = "Levels")]
    pub level: Option<RawNumber>,
    #[serde(rename = "ID")]
    pub id: Option<RawNumber>,
    #[serde(rename = "Value1")]
    pub value1: Option<RawNumber>,
    #[serde(rename = "Value2")]
    pub value2: Option<RawNumber>,
    #[serde(rename = "Value3")]
    pub value3: Option<RawNumber>,
    #[serde(rename = "Value4")]
    pub value4: Option<RawNumber>,
}
