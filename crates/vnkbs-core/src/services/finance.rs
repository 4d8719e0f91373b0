use tracing::debug;

use crate::catalog::{ReportPeriod, ReportType};
use crate::decode::records::RawFinance;
use crate::domain::{FinancialReport, Symbol};
use crate::executor::RequestExecutor;
use crate::normalize::assemble_financial_report;
use crate::request::RequestDescriptor;
use crate::ApiError;

use super::fetch_one;

const PAGE: u32 = 1;
const PAGE_SIZE: u32 = 8;
const UNIT: u32 = 1000;

/// Financial statements for one company.
#[derive(Debug, Clone)]
pub struct FinanceService {
    executor: RequestExecutor,
    symbol: Symbol,
}

impl FinanceService {
    pub fn new(executor: RequestExecutor, symbol: Symbol) -> Self {
        Self { executor, symbol }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub async fn income_statement(
        &self,
        period: ReportPeriod,
    ) -> Result<Option<FinancialReport>, ApiError> {
        self.report(ReportType::IncomeStatement, period).await
    }

    pub async fn balance_sheet(
        &self,
        period: ReportPeriod,
    ) -> Result<Option<FinancialReport>, ApiError> {
        self.report(ReportType::BalanceSheet, period).await
    }

    pub async fn cash_flow(&self, period: ReportPeriod) -> Result<Option<FinancialReport>, ApiError> {
        self.report(ReportType::CashFlow, period).await
    }

    pub async fn ratios(&self, period: ReportPeriod) -> Result<Option<FinancialReport>, ApiError> {
        self.report(ReportType::FinancialRatios, period).await
    }

    pub async fn planned_indicators(
        &self,
        period: ReportPeriod,
    ) -> Result<Option<FinancialReport>, ApiError> {
        self.report(ReportType::PlannedIndicators, period).await
    }

    pub async fn summary(&self, period: ReportPeriod) -> Result<Option<FinancialReport>, ApiError> {
        self.report(ReportType::Summary, period).await
    }

    /// Report looked up by its logical names, e.g. `("cash_flow", "quarter")`.
    pub async fn report_by_name(
        &self,
        report_type: &str,
        period: &str,
    ) -> Result<Option<FinancialReport>, ApiError> {
        let report_type = ReportType::resolve(report_type)?;
        let period = period.parse::<ReportPeriod>()?;
        self.report(report_type, period).await
    }

    /// One statement. `None` when upstream returned no body at all; a body
    /// without the statement's section yields a report with no items.
    pub async fn report(
        &self,
        report_type: ReportType,
        period: ReportPeriod,
    ) -> Result<Option<FinancialReport>, ApiError> {
        debug!(
            symbol = %self.symbol,
            report = report_type.name(),
            code = report_type.code(),
            period = period.as_str(),
            "fetching financial report"
        );

        let language = self.executor.config().language();
        let descriptor = self.descriptor(report_type, period);

        fetch_one(&self.executor, &descriptor, |raw: RawFinance| {
            assemble_financial_report(&self.symbol, report_type, period, language, raw)
        })
        .await
        .map_err(|error| {
            error.with_context(format!("{} ({}) for {}", report_type, period, self.symbol))
        })
    }

    fn descriptor(&self, report_type: ReportType, period: ReportPeriod) -> RequestDescriptor {
        let config = self.executor.config();
        let path = format!("/kbsv-stock-data-store/stock/finance-info/{}", self.symbol);
        let descriptor = RequestDescriptor::get(config.sas_url(&path))
            .with_query("type", report_type.code())
            .with_query("termtype", period.term_type())
            .with_query("page", PAGE)
            .with_query("pageSize", PAGE_SIZE)
            .with_query("unit", UNIT);

        if report_type.uses_symbol_query() {
            descriptor
                .with_query("code", &self.symbol)
                .with_query("termType", period.term_type())
        } else {
            descriptor.with_query("languageid", config.language().code())
        }
    }
}
