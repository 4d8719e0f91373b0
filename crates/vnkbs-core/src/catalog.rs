//! Endpoint catalog: fixed tables mapping logical identifiers to the
//! provider's path and query tokens.
//!
//! Every lookup is total over its declared keys and returns a
//! [`ValidationError`] naming the valid keys for anything else. Nothing here
//! performs I/O.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Language;
use crate::ValidationError;

/// Bar granularity for historical quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
}

const INTERVAL_ALIASES: &[(&str, Interval)] = &[
    ("1m", Interval::OneMinute),
    ("5m", Interval::FiveMinutes),
    ("15m", Interval::FifteenMinutes),
    ("30m", Interval::ThirtyMinutes),
    ("1h", Interval::OneHour),
    ("60m", Interval::OneHour),
    ("1d", Interval::OneDay),
    ("daily", Interval::OneDay),
    ("1w", Interval::OneWeek),
    ("weekly", Interval::OneWeek),
    ("1M", Interval::OneMonth),
    ("monthly", Interval::OneMonth),
];

impl Interval {
    pub const ALL: [Self; 8] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
    ];

    /// Resolves a logical token or alias. Tokens are case-sensitive: `1m` is
    /// one minute and `1M` is one month.
    pub fn resolve(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        INTERVAL_ALIASES
            .iter()
            .find(|(alias, _)| *alias == value)
            .map(|(_, interval)| *interval)
            .ok_or_else(|| ValidationError::InvalidInterval {
                value: value.to_owned(),
                valid: join_keys(INTERVAL_ALIASES.iter().map(|(alias, _)| *alias)),
            })
    }

    /// Upstream suffix used in `data_<suffix>` paths and response keys.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::OneMinute => "1P",
            Self::FiveMinutes => "5P",
            Self::FifteenMinutes => "15P",
            Self::ThirtyMinutes => "30P",
            Self::OneHour => "60P",
            Self::OneDay => "day",
            Self::OneWeek => "week",
            Self::OneMonth => "month",
        }
    }

    /// Canonical logical token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1M",
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::resolve(value)
    }
}

/// Named market segment or index membership set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketGroup {
    Hose,
    Hnx,
    Upcom,
    Vn30,
    Vn100,
    VnMidCap,
    VnSmallCap,
    Vnsi,
    Vnx50,
    VnxAll,
    VnAll,
    Hnx30,
    Etf,
    CoveredWarrant,
    Bond,
    Futures,
}

struct GroupEntry {
    group: MarketGroup,
    name: &'static str,
    token: &'static str,
    description: &'static str,
}

const GROUPS: &[GroupEntry] = &[
    GroupEntry { group: MarketGroup::Hose, name: "HOSE", token: "HOSE", description: "Ho Chi Minh Stock Exchange" },
    GroupEntry { group: MarketGroup::Hnx, name: "HNX", token: "HNX", description: "Hanoi Stock Exchange" },
    GroupEntry { group: MarketGroup::Upcom, name: "UPCOM", token: "UPCOM", description: "UPCOM Market" },
    GroupEntry { group: MarketGroup::Vn30, name: "VN30", token: "30", description: "30 largest and most liquid stocks on HOSE" },
    GroupEntry { group: MarketGroup::Vn100, name: "VN100", token: "100", description: "100 largest stocks on HOSE" },
    GroupEntry { group: MarketGroup::VnMidCap, name: "VNMidCap", token: "MID", description: "Mid-cap index" },
    GroupEntry { group: MarketGroup::VnSmallCap, name: "VNSmallCap", token: "SML", description: "Small-cap index" },
    GroupEntry { group: MarketGroup::Vnsi, name: "VNSI", token: "SI", description: "Vietnam Small-Cap Index" },
    GroupEntry { group: MarketGroup::Vnx50, name: "VNX50", token: "X50", description: "50 largest stocks across HOSE and HNX" },
    GroupEntry { group: MarketGroup::VnxAll, name: "VNXALL", token: "XALL", description: "All stocks on HOSE and HNX" },
    GroupEntry { group: MarketGroup::VnAll, name: "VNALL", token: "ALL", description: "All stocks on HOSE and HNX" },
    GroupEntry { group: MarketGroup::Hnx30, name: "HNX30", token: "HNX30", description: "30 largest stocks on HNX" },
    GroupEntry { group: MarketGroup::Etf, name: "ETF", token: "FUND", description: "Exchange Traded Funds" },
    GroupEntry { group: MarketGroup::CoveredWarrant, name: "CW", token: "CW", description: "Covered Warrants" },
    GroupEntry { group: MarketGroup::Bond, name: "BOND", token: "BOND", description: "Corporate Bonds" },
    GroupEntry { group: MarketGroup::Futures, name: "FU_INDEX", token: "DER", description: "Futures and Derivatives" },
];

impl MarketGroup {
    /// Resolves a group name exactly as the provider spells it (`VN30`,
    /// `VNMidCap`, `FU_INDEX`, ...).
    pub fn resolve(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        GROUPS
            .iter()
            .find(|entry| entry.name == value)
            .map(|entry| entry.group)
            .ok_or_else(|| ValidationError::InvalidGroup {
                value: value.to_owned(),
                valid: join_keys(GROUPS.iter().map(|entry| entry.name)),
            })
    }

    fn entry(self) -> &'static GroupEntry {
        // GROUPS lists every variant exactly once.
        GROUPS
            .iter()
            .find(|entry| entry.group == self)
            .unwrap_or(&GROUPS[0])
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Upstream token used in `/index/<token>/stocks`.
    pub fn token(self) -> &'static str {
        self.entry().token
    }

    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// Every group with its description, in catalog order.
    pub fn descriptions() -> Vec<(&'static str, &'static str)> {
        GROUPS
            .iter()
            .map(|entry| (entry.name, entry.description))
            .collect()
    }
}

impl Display for MarketGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarketGroup {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::resolve(value)
    }
}

/// Financial statement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    FinancialRatios,
    PlannedIndicators,
    Summary,
}

impl ReportType {
    pub const ALL: [Self; 6] = [
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlow,
        Self::FinancialRatios,
        Self::PlannedIndicators,
        Self::Summary,
    ];

    pub fn resolve(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|report| report.name() == value)
            .ok_or_else(|| ValidationError::InvalidReportType {
                value: value.to_owned(),
                valid: join_keys(Self::ALL.iter().map(|report| report.name())),
            })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
            Self::FinancialRatios => "financial_ratios",
            Self::PlannedIndicators => "planned_indicators",
            Self::Summary => "summary",
        }
    }

    /// Upstream report code sent as the `type` query parameter.
    pub const fn code(self) -> &'static str {
        match self {
            Self::IncomeStatement => "KQKD",
            Self::BalanceSheet => "CDKT",
            Self::CashFlow => "LCTT",
            Self::FinancialRatios => "CSTC",
            Self::PlannedIndicators => "CTKH",
            Self::Summary => "BCTT",
        }
    }

    /// Key of the `Content` subtree holding this report's line items, `None`
    /// for report types whose payload carries a single unnamed section.
    pub const fn content_key(self, language: Language) -> Option<&'static str> {
        let key = match (self, language) {
            (Self::IncomeStatement, Language::Vietnamese) => "Kết quả kinh doanh",
            (Self::IncomeStatement, Language::English) => "Business results",
            (Self::BalanceSheet, Language::Vietnamese) => "Cân đối kế toán",
            (Self::BalanceSheet, Language::English) => "Balance sheet",
            (Self::CashFlow, Language::Vietnamese) => "Lưu chuyển tiền tệ gián tiếp",
            (Self::CashFlow, Language::English) => "Indirect cash flow",
            (Self::FinancialRatios, Language::Vietnamese) => "Chỉ số tài chính",
            (Self::FinancialRatios, Language::English) => "Financial ratios",
            (Self::PlannedIndicators | Self::Summary, _) => return None,
        };
        Some(key)
    }

    /// The cash-flow endpoint takes `code`/`termType` instead of `languageid`.
    pub const fn uses_symbol_query(self) -> bool {
        matches!(self, Self::CashFlow)
    }
}

impl Display for ReportType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::resolve(value)
    }
}

/// Reporting period granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    #[default]
    Year,
    Quarter,
}

impl ReportPeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Quarter => "quarter",
        }
    }

    /// Upstream `termtype` value.
    pub const fn term_type(self) -> u8 {
        match self {
            Self::Year => 1,
            Self::Quarter => 2,
        }
    }
}

impl Display for ReportPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportPeriod {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "quarter" => Ok(Self::Quarter),
            other => Err(ValidationError::InvalidReportPeriod {
                value: other.to_owned(),
            }),
        }
    }
}

const INDUSTRIES: &[(u32, &str)] = &[
    (1, "Bán buôn"),
    (2, "Bảo hiểm"),
    (3, "Bất động sản"),
    (5, "Chứng khoán"),
    (6, "Công nghệ và thông tin"),
    (7, "Bán lẻ"),
    (8, "Chăm sóc sức khỏe"),
    (10, "Khai khoáng"),
    (11, "Ngân hàng"),
    (12, "Nông - Lâm - Ngư"),
    (15, "SX Thiết bị, máy móc"),
    (16, "SX Hàng gia dụng"),
    (17, "Sản phẩm cao su"),
    (18, "SX Nhựa - Hóa chất"),
    (19, "Thực phẩm - Đồ uống"),
    (20, "Chế biến Thủy sản"),
    (21, "Vật liệu xây dựng"),
    (22, "Tiện ích"),
    (23, "Vận tải - kho bãi"),
    (24, "Xây dựng"),
    (25, "Dịch vụ lưu trú, ăn uống, giải trí"),
    (26, "SX Phụ trợ"),
    (27, "Thiết bị điện"),
    (28, "Dịch vụ tư vấn, hỗ trợ"),
    (29, "Tài chính khác"),
];

/// Canonical industry name for a provider industry code.
pub fn industry_name(code: u32) -> Result<&'static str, ValidationError> {
    INDUSTRIES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
        .ok_or_else(|| ValidationError::InvalidIndustryCode {
            code,
            valid: join_codes(INDUSTRIES),
        })
}

/// Every known industry as `(code, name)`.
pub fn industries() -> &'static [(u32, &'static str)] {
    INDUSTRIES
}

const EVENT_TYPES: &[(u32, &str)] = &[
    (1, "Đại hội cổ đông"),
    (2, "Trả cổ tức"),
    (3, "Phát hành"),
    (4, "Giao dịch cổ đông nội bộ"),
    (5, "Sự kiện khác"),
];

/// Label of a corporate event type code.
pub fn event_type_name(code: u32) -> Result<&'static str, ValidationError> {
    EVENT_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
        .ok_or_else(|| ValidationError::InvalidEventType {
            code,
            valid: join_codes(EVENT_TYPES),
        })
}

const INDEX_SYMBOLS: &[&str] = &["VNINDEX", "HNXINDEX", "UPCOMINDEX", "VN30", "HNX30", "VN100"];

/// Endpoint family serving historical bars for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRoute {
    Index,
    Equity,
}

impl HistoryRoute {
    /// Decided purely by membership in the fixed index-symbol set.
    pub fn for_symbol(symbol: &str) -> Self {
        if is_index_symbol(symbol) {
            Self::Index
        } else {
            Self::Equity
        }
    }

    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Equity => "stocks",
        }
    }
}

pub fn is_index_symbol(symbol: &str) -> bool {
    INDEX_SYMBOLS.contains(&symbol)
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}

fn join_codes(table: &[(u32, &str)]) -> String {
    table
        .iter()
        .map(|(code, _)| code.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_aliases_collapse_to_one_suffix() {
        let expected = [
            ("1m", "1P"),
            ("5m", "5P"),
            ("15m", "15P"),
            ("30m", "30P"),
            ("1h", "60P"),
            ("60m", "60P"),
            ("1d", "day"),
            ("daily", "day"),
            ("1w", "week"),
            ("weekly", "week"),
            ("1M", "month"),
            ("monthly", "month"),
        ];
        for (alias, suffix) in expected {
            let interval = Interval::resolve(alias).expect("alias should resolve");
            assert_eq!(interval.suffix(), suffix, "alias {alias}");
        }
    }

    #[test]
    fn unknown_interval_lists_valid_tokens() {
        let err = Interval::resolve("2h").expect_err("must fail");
        let message = err.to_string();
        assert!(matches!(err, ValidationError::InvalidInterval { .. }));
        assert!(message.contains("'2h'"));
        assert!(message.contains("1m, 5m, 15m, 30m, 1h, 60m, 1d, daily, 1w, weekly, 1M, monthly"));
    }

    #[test]
    fn interval_tokens_are_case_sensitive() {
        assert_eq!(Interval::resolve("1m"), Ok(Interval::OneMinute));
        assert_eq!(Interval::resolve("1M"), Ok(Interval::OneMonth));
        assert!(Interval::resolve("DAILY").is_err());
    }

    #[test]
    fn group_resolution_yields_upstream_token() {
        assert_eq!(MarketGroup::resolve("VN30").map(MarketGroup::token), Ok("30"));
        assert_eq!(MarketGroup::resolve("ETF").map(MarketGroup::token), Ok("FUND"));
        assert_eq!(MarketGroup::resolve("FU_INDEX").map(MarketGroup::token), Ok("DER"));

        let err = MarketGroup::resolve("NOT_A_GROUP").expect_err("must fail");
        assert!(err.to_string().contains("HOSE, HNX, UPCOM, VN30"));
    }

    #[test]
    fn every_group_has_a_description() {
        let descriptions = MarketGroup::descriptions();
        assert_eq!(descriptions.len(), 16);
        assert!(descriptions.iter().all(|(_, text)| !text.is_empty()));
    }

    #[test]
    fn report_types_map_to_codes_and_content_keys() {
        let income = ReportType::resolve("income_statement").expect("known report");
        assert_eq!(income.code(), "KQKD");
        assert_eq!(income.content_key(Language::Vietnamese), Some("Kết quả kinh doanh"));
        assert_eq!(income.content_key(Language::English), Some("Business results"));

        let codes: Vec<_> = ReportType::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes, ["KQKD", "CDKT", "LCTT", "CSTC", "CTKH", "BCTT"]);

        let keyed: Vec<_> = ReportType::ALL
            .iter()
            .filter(|r| r.content_key(Language::Vietnamese).is_some())
            .map(|r| r.code())
            .collect();
        assert_eq!(keyed, ["KQKD", "CDKT", "LCTT", "CSTC"]);
        assert_eq!(ReportType::Summary.content_key(Language::English), None);
    }

    #[test]
    fn unknown_report_type_is_rejected() {
        let err = ReportType::resolve("dividends").expect_err("must fail");
        assert!(err.to_string().contains("income_statement, balance_sheet"));
    }

    #[test]
    fn report_period_maps_to_term_type() {
        assert_eq!("year".parse::<ReportPeriod>().map(ReportPeriod::term_type), Ok(1));
        assert_eq!("Quarter".parse::<ReportPeriod>().map(ReportPeriod::term_type), Ok(2));
        assert!("month".parse::<ReportPeriod>().is_err());
    }

    #[test]
    fn industry_lookup_is_fixed() {
        assert_eq!(industry_name(11), Ok("Ngân hàng"));
        let err = industry_name(4).expect_err("code 4 is not assigned");
        assert!(err.to_string().contains("1, 2, 3, 5"));
        assert_eq!(industries().len(), 25);
    }

    #[test]
    fn event_types_are_one_through_five() {
        assert_eq!(event_type_name(2), Ok("Trả cổ tức"));
        assert!(event_type_name(6).is_err());
    }

    #[test]
    fn index_symbols_route_to_index_family() {
        assert_eq!(HistoryRoute::for_symbol("VNINDEX"), HistoryRoute::Index);
        assert_eq!(HistoryRoute::for_symbol("VN30"), HistoryRoute::Index);
        assert_eq!(HistoryRoute::for_symbol("VNM"), HistoryRoute::Equity);
        assert_eq!(HistoryRoute::Index.path_segment(), "index");
        assert_eq!(HistoryRoute::Equity.path_segment(), "stocks");
    }
}
