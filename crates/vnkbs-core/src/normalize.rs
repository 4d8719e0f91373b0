//! Normalizer: intermediate records into domain values.
//!
//! Scaled integer prices are divided by 1000 here and nowhere else. Each of
//! the provider's date formats has exactly one format-exact parser.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde_json::Value;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::catalog::{ReportPeriod, ReportType};
use crate::config::Language;
use crate::decode::records::{
    RawAudit, RawBar, RawBoardEntry, RawCharterCapital, RawEvent, RawFinance, RawFinancialItem,
    RawIndustry, RawIndustryStock, RawInsiderTrade, RawLeader, RawNews, RawOwnership, RawProfile,
    RawShareholder, RawSubsidiary, RawSymbol, RawTrade, RawUnit,
};
use crate::decode::{list_from_value, RawNumber};
use crate::domain::{
    CharterCapitalEntry, CompanyEvent, CompanyProfile, FinancialItem, FinancialReport,
    HistoricalPrice, IndustryInfo, IndustryStock, InsiderTrade, IntradayTrade, Leader, NewsItem,
    Ownership, PriceBoardEntry, PriceLevel, Shareholder, StockSymbol, Subsidiary, Symbol, TradeSide,
};
use crate::DecodeError;

const BAR_TIME_FORMAT: &str = "yyyy-MM-dd HH:mm";
const TICK_TIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss:CS";
const FILING_DATE_FORMAT: &str = "dd/MM/yyyy";
const TRADE_TIME_FORMAT: &str = "HH:mm:ss";

/// Converts a provider integer price (×1000) to currency units.
pub fn scale_price(raw: Decimal) -> Decimal {
    raw / Decimal::ONE_THOUSAND
}

/// Parses an OHLCV bar time such as `2024-01-31 07:00`.
pub fn parse_bar_time(value: &str) -> Result<PrimitiveDateTime, DecodeError> {
    PrimitiveDateTime::parse(
        value.trim(),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    )
    .map_err(|_| timestamp_error(value, BAR_TIME_FORMAT))
}

/// Parses a tick timestamp such as `2026-02-27 14:45:29:84`, discarding the
/// sub-second group after the last `:`.
pub fn parse_tick_time(value: &str) -> Result<PrimitiveDateTime, DecodeError> {
    let trimmed = value.trim();
    let (head, _centis) = trimmed
        .rsplit_once(':')
        .ok_or_else(|| timestamp_error(value, TICK_TIME_FORMAT))?;
    PrimitiveDateTime::parse(
        head,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .map_err(|_| timestamp_error(value, TICK_TIME_FORMAT))
}

/// Parses a filing or trading date in day/month/year order.
pub fn parse_filing_date(value: &str) -> Result<Date, DecodeError> {
    Date::parse(value.trim(), format_description!("[day]/[month]/[year]"))
        .map_err(|_| timestamp_error(value, FILING_DATE_FORMAT))
}

pub fn parse_trade_time(value: &str) -> Result<Time, DecodeError> {
    Time::parse(value.trim(), format_description!("[hour]:[minute]:[second]"))
        .map_err(|_| timestamp_error(value, TRADE_TIME_FORMAT))
}

/// Formats a date as the `dd-MM-yyyy` query value of the history endpoints.
pub fn format_query_date(date: Date) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Label for one financial period column: `2024` for a year, `2024-Q2` for
/// a quarter term (`Quý 2`, `Quarter 2`).
pub fn period_label(year: Option<i64>, term_name: Option<&str>) -> String {
    let Some(year) = year else {
        return String::new();
    };

    let quarter = term_name
        .filter(|term| is_quarter_term(term))
        .map(|term| term.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|digits| !digits.is_empty());

    match quarter {
        Some(quarter) => format!("{year}-Q{quarter}"),
        None => year.to_string(),
    }
}

fn is_quarter_term(term: &str) -> bool {
    term.contains("Quý") || term.to_lowercase().contains("quarter")
}

fn timestamp_error(value: &str, format: &'static str) -> DecodeError {
    DecodeError::Timestamp {
        value: value.to_owned(),
        format,
    }
}

fn optional_decimal(raw: Option<&RawNumber>) -> Option<Decimal> {
    raw.and_then(RawNumber::to_decimal)
}

fn optional_price(raw: Option<&RawNumber>) -> Option<Decimal> {
    optional_decimal(raw).map(scale_price)
}

fn optional_integer(raw: Option<&RawNumber>) -> Option<i64> {
    raw.and_then(RawNumber::to_i64)
}

fn required_price(field: &'static str, raw: Option<&RawNumber>) -> Result<Decimal, DecodeError> {
    let raw = raw.ok_or(DecodeError::MissingField { field })?;
    raw.to_decimal()
        .map(scale_price)
        .ok_or_else(|| DecodeError::MalformedField {
            field,
            value: raw.raw(),
        })
}

fn required_integer(field: &'static str, raw: Option<&RawNumber>) -> Result<i64, DecodeError> {
    let raw = raw.ok_or(DecodeError::MissingField { field })?;
    raw.to_i64().ok_or_else(|| DecodeError::MalformedField {
        field,
        value: raw.raw(),
    })
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, DecodeError> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .ok_or(DecodeError::MissingField { field })
}

/// Runs a format-exact parser on a present, non-blank value.
fn optional_time<T>(
    value: Option<&str>,
    parse: fn(&str) -> Result<T, DecodeError>,
) -> Result<Option<T>, DecodeError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse(text).map(Some),
    }
}

pub(crate) fn normalize_symbol(raw: RawSymbol) -> Result<StockSymbol, DecodeError> {
    Ok(StockSymbol {
        symbol: required_text("symbol", raw.symbol)?,
        name: raw.name,
        name_en: raw.name_en,
        exchange: raw.exchange,
        security_type: raw.security_type,
        index: optional_integer(raw.index.as_ref()),
        reference_price: optional_price(raw.re.as_ref()),
        ceiling_price: optional_price(raw.ceiling.as_ref()),
        floor_price: optional_price(raw.floor.as_ref()),
    })
}

pub(crate) fn normalize_bar(raw: RawBar) -> Result<HistoricalPrice, DecodeError> {
    let time = raw.t.as_deref().ok_or(DecodeError::MissingField { field: "t" })?;
    Ok(HistoricalPrice {
        time: parse_bar_time(time)?,
        open: required_price("o", raw.o.as_ref())?,
        high: required_price("h", raw.h.as_ref())?,
        low: required_price("l", raw.l.as_ref())?,
        close: required_price("c", raw.c.as_ref())?,
        volume: required_integer("v", raw.v.as_ref())?,
    })
}

pub(crate) fn normalize_trade(raw: RawTrade) -> Result<IntradayTrade, DecodeError> {
    Ok(IntradayTrade {
        timestamp: optional_time(raw.t.as_deref(), parse_tick_time)?,
        trading_date: optional_time(raw.trading_date.as_deref(), parse_filing_date)?,
        time: optional_time(raw.time.as_deref(), parse_trade_time)?,
        side: TradeSide::from_code(raw.side.as_deref()),
        price: optional_price(raw.price.as_ref()),
        price_change: optional_price(raw.price_change.as_ref()),
        match_volume: optional_integer(raw.match_volume.as_ref()),
        accumulated_volume: optional_integer(raw.accumulated_volume.as_ref()),
        accumulated_value: optional_decimal(raw.accumulated_value.as_ref()),
        symbol: raw.symbol,
    })
}

fn level(price: Option<&RawNumber>, volume: Option<&RawNumber>) -> PriceLevel {
    PriceLevel {
        price: optional_price(price),
        volume: optional_integer(volume),
    }
}

pub(crate) fn normalize_board_entry(raw: RawBoardEntry) -> Result<PriceBoardEntry, DecodeError> {
    let bids = vec![
        level(raw.bid_price_1.as_ref(), raw.bid_volume_1.as_ref()),
        level(raw.bid_price_2.as_ref(), raw.bid_volume_2.as_ref()),
        level(raw.bid_price_3.as_ref(), raw.bid_volume_3.as_ref()),
    ];
    let asks = vec![
        level(raw.ask_price_1.as_ref(), raw.ask_volume_1.as_ref()),
        level(raw.ask_price_2.as_ref(), raw.ask_volume_2.as_ref()),
        level(raw.ask_price_3.as_ref(), raw.ask_volume_3.as_ref()),
    ];

    Ok(PriceBoardEntry {
        symbol: required_text("SB", raw.symbol)?,
        timestamp: optional_integer(raw.t.as_ref()),
        exchange: raw.exchange,
        ceiling_price: optional_price(raw.ceiling.as_ref()),
        floor_price: optional_price(raw.floor.as_ref()),
        reference_price: optional_price(raw.reference.as_ref()),
        open_price: optional_price(raw.open.as_ref()),
        high_price: optional_price(raw.high.as_ref()),
        low_price: optional_price(raw.low.as_ref()),
        close_price: optional_price(raw.close.as_ref()),
        average_price: optional_price(raw.average.as_ref()),
        total_trades: optional_integer(raw.total_trades.as_ref()),
        total_value: optional_decimal(raw.total_value.as_ref()),
        price_change: optional_price(raw.change.as_ref()),
        percent_change: optional_decimal(raw.change_percent.as_ref()),
        bids,
        asks,
        foreign_buy_volume: optional_integer(raw.foreign_buy_volume.as_ref()),
        foreign_sell_volume: optional_integer(raw.foreign_sell_volume.as_ref()),
        foreign_buy_count: optional_integer(raw.foreign_buy_count.as_ref()),
        foreign_sell_count: optional_integer(raw.foreign_sell_count.as_ref()),
        put_through_quantity: optional_integer(raw.put_through_quantity.as_ref()),
        put_through_value: optional_decimal(raw.put_through_value.as_ref()),
        total_listed_quantity: optional_integer(raw.total_listed_quantity.as_ref()),
        listed_shares: optional_integer(raw.listed_shares.as_ref()),
        foreign_ownership_ratio: optional_decimal(raw.foreign_ownership_ratio.as_ref()),
    })
}

/// Profile values are published in currency units already and are not
/// rescaled.
pub(crate) fn normalize_profile(raw: RawProfile) -> CompanyProfile {
    CompanyProfile {
        symbol: raw.symbol,
        business_model: raw.business_model,
        founded_date: raw.founded_date,
        charter_capital: optional_decimal(raw.charter_capital.as_ref()),
        employees: optional_integer(raw.employees.as_ref()),
        listing_date: raw.listing_date,
        par_value: optional_decimal(raw.par_value.as_ref()),
        exchange: raw.exchange,
        listing_price: optional_decimal(raw.listing_price.as_ref()),
        listed_volume: optional_integer(raw.listed_volume.as_ref()),
        ceo_name: raw.ceo_name,
        ceo_position: raw.ceo_position,
        inspector_name: raw.inspector_name,
        inspector_position: raw.inspector_position,
        establishment_license: raw.establishment_license,
        business_code: raw.business_code,
        tax_id: raw.tax_id,
        auditor: raw.auditor,
        company_type: raw.company_type,
        address: raw.address,
        phone: raw.phone,
        fax: raw.fax,
        email: raw.email,
        website: raw.website,
        free_float_percentage: optional_decimal(raw.free_float_percentage.as_ref()),
        free_float: optional_integer(raw.free_float.as_ref()),
        outstanding_shares: optional_integer(raw.outstanding_shares.as_ref()),
        as_of_date: raw.as_of_date,
        subsidiaries: raw.subsidiaries.into_iter().map(normalize_subsidiary).collect(),
        leaders: raw.leaders.into_iter().map(normalize_leader).collect(),
        ownership: raw.ownership.into_iter().map(normalize_ownership).collect(),
        shareholders: raw.shareholders.into_iter().map(normalize_shareholder).collect(),
        charter_capital_history: raw
            .charter_capital_history
            .into_iter()
            .map(normalize_charter_capital)
            .collect(),
    }
}

fn normalize_subsidiary(raw: RawSubsidiary) -> Subsidiary {
    Subsidiary {
        update_date: raw.update_date,
        name: raw.name,
        charter_capital: optional_decimal(raw.charter_capital.as_ref()),
        ownership_percent: optional_decimal(raw.ownership_percent.as_ref()),
        currency: raw.currency,
    }
}

fn normalize_leader(raw: RawLeader) -> Leader {
    Leader {
        from_date: raw.from_date,
        position: raw.position,
        name: raw.name,
        position_en: raw.position_en,
        owner_code: raw.owner_code,
    }
}

fn normalize_ownership(raw: RawOwnership) -> Ownership {
    Ownership {
        owner_type: raw.owner_type,
        ownership_percent: optional_decimal(raw.ownership_percent.as_ref()),
        shares: optional_integer(raw.shares.as_ref()),
        update_date: raw.update_date,
    }
}

fn normalize_shareholder(raw: RawShareholder) -> Shareholder {
    Shareholder {
        name: raw.name,
        update_date: raw.update_date,
        shares: optional_integer(raw.shares.as_ref()),
        ownership_percent: optional_decimal(raw.ownership_percent.as_ref()),
    }
}

fn normalize_charter_capital(raw: RawCharterCapital) -> CharterCapitalEntry {
    CharterCapitalEntry {
        date: raw.date,
        charter_capital: optional_decimal(raw.charter_capital.as_ref()),
        currency: raw.currency,
    }
}

pub(crate) fn normalize_industry(raw: RawIndustry) -> IndustryInfo {
    IndustryInfo {
        code: optional_integer(raw.code.as_ref()),
        name: raw.name,
        change: optional_decimal(raw.change.as_ref()),
    }
}

pub(crate) fn normalize_industry_stock(raw: RawIndustryStock) -> IndustryStock {
    IndustryStock {
        symbol: raw.sb,
        price: optional_price(raw.pr.as_ref()),
        change: optional_price(raw.ch.as_ref()),
        volume: optional_integer(raw.vo.as_ref()),
    }
}

pub(crate) fn normalize_event(raw: RawEvent) -> CompanyEvent {
    CompanyEvent {
        event_id: optional_integer(raw.event_id.as_ref()),
        symbol: raw.stock_code,
        title: raw.title,
        content: raw.content,
        event_date: raw.event_date,
        event_type: optional_integer(raw.event_type.as_ref()),
        event_type_name: raw.event_type_name,
    }
}

pub(crate) fn normalize_news(raw: RawNews) -> NewsItem {
    NewsItem {
        article_id: optional_integer(raw.article_id.as_ref()),
        title: raw.title,
        publish_time: raw.publish_time,
        url: raw.url,
        head: raw.head,
    }
}

pub(crate) fn normalize_insider_trade(raw: RawInsiderTrade) -> InsiderTrade {
    InsiderTrade {
        event_id: optional_integer(raw.event_id.as_ref()),
        symbol: raw.stock_code,
        title: raw.title,
        content: raw.content,
        type_name: raw.type_name,
        register_buy_volume: optional_integer(raw.register_buy_volume.as_ref()),
        buy_volume: optional_integer(raw.buy_volume.as_ref()),
        volume_before: optional_integer(raw.volume_before.as_ref()),
        volume_after: optional_integer(raw.volume_after.as_ref()),
    }
}

fn normalize_financial_item(raw: RawFinancialItem) -> FinancialItem {
    FinancialItem {
        id: optional_integer(raw.id.as_ref()),
        name: raw.name,
        name_en: raw.name_en,
        unit: raw.unit,
        level: optional_integer(raw.level.as_ref()),
        values: [&raw.value1, &raw.value2, &raw.value3, &raw.value4]
            .into_iter()
            .map(|value| optional_decimal(value.as_ref()))
            .collect(),
    }
}

fn code_table<T>(
    rows: Vec<T>,
    split: impl Fn(T) -> (Option<String>, Option<String>),
) -> BTreeMap<String, String> {
    rows.into_iter()
        .filter_map(|row| match split(row) {
            (Some(code), Some(description)) => Some((code, description)),
            _ => None,
        })
        .collect()
}

/// Section of `Content` for `report_type`: the configured locale's key
/// first, then the other locale's. Report types without a known key take
/// the first section present.
fn take_section(
    content: &mut BTreeMap<String, Value>,
    report_type: ReportType,
    language: Language,
) -> Option<Value> {
    if report_type.content_key(language).is_none() {
        return content.pop_first().map(|(_, section)| section);
    }
    [language, language.other()]
        .into_iter()
        .filter_map(|candidate| report_type.content_key(candidate))
        .find_map(|key| content.remove(key))
}

/// Reassembles the header, audit table, unit table and content section of
/// a financial payload into one report. A missing content section yields an
/// empty item list.
pub(crate) fn assemble_financial_report(
    symbol: &Symbol,
    report_type: ReportType,
    period: ReportPeriod,
    language: Language,
    raw: RawFinance,
) -> Result<FinancialReport, DecodeError> {
    let periods = raw
        .head
        .iter()
        .map(|head| {
            period_label(
                optional_integer(head.year.as_ref()),
                head.term_name.as_deref().or(head.term_name_en.as_deref()),
            )
        })
        .collect();
    let period_audit = raw
        .head
        .iter()
        .map(|head| head.audited_status.clone())
        .collect();

    let audit_status = code_table(raw.audit, |row: RawAudit| (row.code, row.description));
    let units = code_table(raw.unit, |row: RawUnit| (row.code, row.description));

    let mut content = raw.content.unwrap_or_default();
    let items = match take_section(&mut content, report_type, language) {
        Some(section) => list_from_value::<RawFinancialItem>(section)?
            .into_iter()
            .map(normalize_financial_item)
            .collect(),
        None => Vec::new(),
    };

    Ok(FinancialReport {
        symbol: symbol.clone(),
        report_type,
        period,
        periods,
        period_audit,
        audit_status,
        units,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::{date, datetime, time};

    fn raw_finance(json: &str) -> RawFinance {
        serde_json::from_str(json).expect("fixture should decode")
    }

    #[test]
    fn scaling_divides_by_one_thousand_exactly() {
        for raw in [0_i64, 1_000, 25_500, 123_450, 1_000_000_000] {
            let scaled = scale_price(Decimal::from(raw));
            assert_eq!(scaled * Decimal::ONE_THOUSAND, Decimal::from(raw));
        }
        assert_eq!(scale_price(dec!(25500)), dec!(25.5));
    }

    #[test]
    fn tick_timestamp_drops_sub_second_group() {
        assert_eq!(
            parse_tick_time("2026-02-27 14:45:29:84").expect("parses"),
            datetime!(2026-02-27 14:45:29)
        );
        assert!(matches!(
            parse_tick_time("2026-02-27T14:45:29"),
            Err(DecodeError::Timestamp { format: "yyyy-MM-dd HH:mm:ss:CS", .. })
        ));
    }

    #[test]
    fn filing_date_is_day_month_year() {
        assert_eq!(parse_filing_date("27/02/2026").expect("parses"), date!(2026-02-27));
        assert!(parse_filing_date("2026-02-27").is_err());
    }

    #[test]
    fn bar_time_has_no_seconds() {
        assert_eq!(
            parse_bar_time("2024-01-31 07:00").expect("parses"),
            datetime!(2024-01-31 07:00)
        );
        assert!(parse_bar_time("2024-01-31 07:00:00").is_err());
        assert_eq!(parse_trade_time("14:45:29").expect("parses"), time!(14:45:29));
    }

    #[test]
    fn query_dates_are_day_month_year_with_dashes() {
        assert_eq!(format_query_date(date!(2024-03-05)), "05-03-2024");
    }

    #[test]
    fn period_labels_follow_term_names() {
        assert_eq!(period_label(Some(2024), Some("Năm")), "2024");
        assert_eq!(period_label(Some(2024), Some("Quý 2")), "2024-Q2");
        assert_eq!(period_label(Some(2023), Some("Quarter 4")), "2023-Q4");
        assert_eq!(period_label(None, Some("Quý 1")), "");
    }

    #[test]
    fn bar_with_malformed_price_is_a_decode_error() {
        let raw: RawBar = serde_json::from_str(
            r#"{"t":"2024-01-31 07:00","o":"n/a","h":26000,"l":25000,"c":25500,"v":1200}"#,
        )
        .expect("fixture should decode");
        let err = normalize_bar(raw).expect_err("must fail");
        assert!(matches!(err, DecodeError::MalformedField { field: "o", .. }));
    }

    #[test]
    fn bar_prices_are_scaled() {
        let raw: RawBar = serde_json::from_str(
            r#"{"t":"2024-01-31 07:00","o":25000,"h":26000,"l":24900,"c":25500,"v":1200}"#,
        )
        .expect("fixture should decode");
        let bar = normalize_bar(raw).expect("normalizes");
        assert_eq!(bar.open, dec!(25));
        assert_eq!(bar.high, dec!(26));
        assert_eq!(bar.low, dec!(24.9));
        assert_eq!(bar.close, dec!(25.5));
        assert_eq!(bar.volume, 1200);
    }

    #[test]
    fn board_levels_parse_leniently() {
        let raw: RawBoardEntry = serde_json::from_str(
            r#"{"SB":"VNM","t":1706684400000,"RE":70000,"B1":"ATO","V1":500,"B2":"69900","V2":"300","S1":70100}"#,
        )
        .expect("fixture should decode");
        let entry = normalize_board_entry(raw).expect("normalizes");

        assert_eq!(entry.reference_price, Some(dec!(70)));
        assert_eq!(entry.bids[0].price, None);
        assert_eq!(entry.bids[0].volume, Some(500));
        assert_eq!(entry.bids[1].price, Some(dec!(69.9)));
        assert_eq!(entry.bids[1].volume, Some(300));
        assert_eq!(entry.best_ask(), Some(dec!(70.1)));
        assert_eq!(entry.asks[2], PriceLevel { price: None, volume: None });
    }

    #[test]
    fn trade_normalizes_all_three_time_formats() {
        let raw: RawTrade = serde_json::from_str(
            r#"{"t":"2026-02-27 14:45:29:84","TD":"27/02/2026","SB":"VNM","FT":"14:45:29","LC":"B","FMP":70100,"FCV":100,"FV":200,"AVO":15000,"AVA":1051500}"#,
        )
        .expect("fixture should decode");
        let trade = normalize_trade(raw).expect("normalizes");

        assert_eq!(trade.timestamp, Some(datetime!(2026-02-27 14:45:29)));
        assert_eq!(trade.trading_date, Some(date!(2026-02-27)));
        assert_eq!(trade.time, Some(time!(14:45:29)));
        assert!(trade.is_buy());
        assert_eq!(trade.price, Some(dec!(70.1)));
        assert_eq!(trade.price_change, Some(dec!(0.1)));
        assert_eq!(trade.accumulated_value, Some(dec!(1051500)));
    }

    #[test]
    fn financial_report_uses_locale_key_then_fallback() {
        let raw = raw_finance(
            r#"{
                "Audit": [{"AuditedStatusCode": 1, "Description": "Đã kiểm toán"}],
                "Unit": {"UnitCode": "1000", "Description": "Nghìn đồng"},
                "Head": [
                    {"YearPeriod": 2024, "TermName": "Năm"},
                    {"YearPeriod": 2024, "TermName": "Quý 2"}
                ],
                "Content": {
                    "Business results": [
                        {"ID": 1, "Name": "Doanh thu", "NameEn": "Revenue", "Levels": 0,
                         "Value1": 1500.5, "Value2": "1200", "Value3": null}
                    ]
                }
            }"#,
        );
        let symbol = Symbol::parse("VNM").expect("symbol");
        let report = assemble_financial_report(
            &symbol,
            ReportType::IncomeStatement,
            ReportPeriod::Year,
            Language::Vietnamese,
            raw,
        )
        .expect("assembles");

        assert_eq!(report.periods, vec!["2024", "2024-Q2"]);
        assert_eq!(report.period_audit, vec![None, None]);
        assert_eq!(report.audit_status.get("1").map(String::as_str), Some("Đã kiểm toán"));
        assert_eq!(report.units.get("1000").map(String::as_str), Some("Nghìn đồng"));
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].value(0), Some(dec!(1500.5)));
        assert_eq!(report.items[0].value(1), Some(dec!(1200)));
        assert_eq!(report.items[0].value(2), None);
        assert_eq!(report.items[0].value(7), None);
    }

    #[test]
    fn missing_content_section_yields_empty_items() {
        let raw = raw_finance(r#"{"Head": [{"YearPeriod": 2024, "TermName": "Năm"}], "Content": {"Other": []}}"#);
        let symbol = Symbol::parse("VNM").expect("symbol");
        let report = assemble_financial_report(
            &symbol,
            ReportType::BalanceSheet,
            ReportPeriod::Year,
            Language::Vietnamese,
            raw,
        )
        .expect("assembles");

        assert!(report.items.is_empty());
        assert_eq!(report.periods, vec!["2024"]);
    }

    #[test]
    fn head_audit_codes_line_up_with_periods() {
        let raw = raw_finance(
            r#"{
                "Audit": [
                    {"AuditedStatusCode": 1, "Description": "Đã kiểm toán"},
                    {"AuditedStatusCode": 0, "Description": "Chưa kiểm toán"}
                ],
                "Head": [
                    {"YearPeriod": 2023, "TermName": "Năm", "AuditedStatus": 1},
                    {"YearPeriod": 2024, "TermName": "Năm", "AuditedStatus": "0"},
                    {"YearPeriod": 2025, "TermName": "Năm"}
                ]
            }"#,
        );
        let symbol = Symbol::parse("VNM").expect("symbol");
        let report = assemble_financial_report(
            &symbol,
            ReportType::IncomeStatement,
            ReportPeriod::Year,
            Language::Vietnamese,
            raw,
        )
        .expect("assembles");

        assert_eq!(
            report.period_audit,
            vec![Some(String::from("1")), Some(String::from("0")), None]
        );
        assert_eq!(report.period_audit_description(0), Some("Đã kiểm toán"));
        assert_eq!(report.period_audit_description(1), Some("Chưa kiểm toán"));
        assert_eq!(report.period_audit_description(2), None);
        assert_eq!(report.period_audit_description(9), None);
    }

    #[test]
    fn keyless_report_types_take_the_first_section() {
        for report_type in [ReportType::PlannedIndicators, ReportType::Summary] {
            let raw = raw_finance(
                r#"{
                    "Head": [{"YearPeriod": 2024, "TermName": "Năm"}],
                    "Content": {
                        "Kế hoạch": [{"ID": 7, "Name": "Lợi nhuận", "Value1": "900"}]
                    }
                }"#,
            );
            let symbol = Symbol::parse("VNM").expect("symbol");
            let report = assemble_financial_report(
                &symbol,
                report_type,
                ReportPeriod::Year,
                Language::English,
                raw,
            )
            .expect("assembles");

            assert_eq!(report.items.len(), 1, "{report_type}");
            assert_eq!(report.items[0].id, Some(7));
        }
    }
}
