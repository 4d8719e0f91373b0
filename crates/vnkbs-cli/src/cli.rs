//! CLI argument definitions for vnkbs.
//!
//! Every sub-command maps onto one facade operation of `vnkbs-core` and
//! prints its result as JSON on stdout. Diagnostics go to stderr.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `symbols` | Listed stocks (or every listing with `--all`) |
//! | `group` | Constituents of a market group |
//! | `groups` | Supported market groups |
//! | `industries` | Industry list |
//! | `industry` | Members of one industry |
//! | `history` | Historical OHLCV bars |
//! | `intraday` | Matched trades of the current session |
//! | `profile` | Company profile |
//! | `events` | Corporate events |
//! | `news` | Company news |
//! | `insider` | Insider transactions |
//! | `finance` | Financial statements |
//! | `board` | Price board for several symbols |
//! | `price` | Price board row for one symbol |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--verbose` | `false` | Debug logging on stderr |
//! | `--language` | `VNKBS_LANGUAGE` or `vi` | Response language (`vi`, `en`) |
//!
//! # Examples
//!
//! ```bash
//! vnkbs history VNM --start 2024-01-01 --end 2024-03-31 --interval 1d
//! vnkbs finance FPT income_statement --period quarter --pretty
//! vnkbs board VNM FPT ACB
//! ```

use clap::{Args, Parser, Subcommand};
use time::macros::format_description;
use time::Date;

/// vnkbs - Vietnamese equity market data from KBS
#[derive(Debug, Parser)]
#[command(
    name = "vnkbs",
    author,
    version,
    about = "Vietnamese equity market data from the KBS API",
    long_about = "vnkbs fetches listings, quotes, company filings, financial statements \
and the real-time price board from KBS and prints them as normalized JSON.\n\
\n\
Configuration is read from VNKBS_* environment variables. Set RUST_LOG to \
control logging.\n\
\n\
Use 'vnkbs <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log requests and retries to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Response language, `vi` or `en`.
    ///
    /// Overrides VNKBS_LANGUAGE.
    #[arg(long, global = true)]
    pub language: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List listed stocks.
    ///
    /// # Examples
    ///
    ///   vnkbs symbols
    ///   vnkbs symbols --all
    Symbols(SymbolsArgs),

    /// Constituents of a market group (VN30, HOSE, ETF, ...).
    Group(GroupArgs),

    /// Supported market groups with descriptions. No network access.
    Groups,

    /// Industry list.
    Industries,

    /// Members of one industry.
    Industry(IndustryArgs),

    /// Historical OHLCV bars.
    ///
    /// Index symbols such as VNINDEX are served from the index endpoints.
    ///
    /// # Examples
    ///
    ///   vnkbs history VNM --start 2024-01-01 --end 2024-01-31
    ///   vnkbs history VNINDEX --start 2024-01-01 --end 2024-12-31 --interval 1w
    History(HistoryArgs),

    /// Matched trades of the current session, most recent first.
    Intraday(IntradayArgs),

    /// Company profile.
    Profile(SymbolArg),

    /// Corporate events.
    Events(EventsArgs),

    /// Company news.
    News(PagedArgs),

    /// Insider transactions.
    Insider(PagedArgs),

    /// Financial statements.
    ///
    /// REPORT is one of income_statement, balance_sheet, cash_flow,
    /// financial_ratios, planned_indicators, summary.
    ///
    /// # Examples
    ///
    ///   vnkbs finance VNM balance_sheet
    ///   vnkbs finance FPT cash_flow --period quarter
    Finance(FinanceArgs),

    /// Price board for one or more symbols.
    Board(BoardArgs),

    /// Price board row for one symbol.
    Price(SymbolArg),
}

#[derive(Debug, Args)]
pub struct SymbolsArgs {
    /// Include funds, warrants and bonds.
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Group name, e.g. VN30, HOSE, ETF.
    pub group: String,
}

#[derive(Debug, Args)]
pub struct IndustryArgs {
    /// Industry code from `vnkbs industries`.
    pub code: u32,
}

#[derive(Debug, Args)]
pub struct SymbolArg {
    /// Market symbol, e.g. VNM.
    pub symbol: String,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Market or index symbol.
    pub symbol: String,

    /// First day, YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    pub start: Date,

    /// Last day (inclusive), YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    pub end: Date,

    /// Bar interval.
    ///
    /// Supported intervals: 1m, 5m, 15m, 30m, 1h, 1d, 1w, 1M
    /// (aliases such as `daily` or `weekly` are accepted).
    #[arg(long, default_value = "1d")]
    pub interval: String,
}

#[derive(Debug, Args)]
pub struct IntradayArgs {
    pub symbol: String,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Trades per page.
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}

#[derive(Debug, Args)]
pub struct PagedArgs {
    pub symbol: String,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = 10)]
    pub size: u32,
}

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(flatten)]
    pub paged: PagedArgs,

    /// Event type code (1 shareholder meeting, 2 dividend, 3 issuance,
    /// 4 insider transaction, 5 other).
    #[arg(long = "type")]
    pub event_type: Option<u32>,
}

#[derive(Debug, Args)]
pub struct FinanceArgs {
    pub symbol: String,

    /// Report name.
    pub report: String,

    /// `year` or `quarter`.
    #[arg(long, default_value = "year")]
    pub period: String,
}

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// One or more market symbols.
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn history_parses_dates_and_default_interval() {
        let cli = Cli::try_parse_from([
            "vnkbs", "history", "VNM", "--start", "2024-01-01", "--end", "2024-01-31",
        ])
        .expect("arguments should parse");

        let Command::History(args) = cli.command else {
            panic!("expected history command");
        };
        assert_eq!(args.symbol, "VNM");
        assert_eq!(args.start, date!(2024 - 01 - 01));
        assert_eq!(args.end, date!(2024 - 01 - 31));
        assert_eq!(args.interval, "1d");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result = Cli::try_parse_from([
            "vnkbs", "history", "VNM", "--start", "01-01-2024", "--end", "2024-01-31",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["vnkbs", "board", "VNM", "FPT", "--pretty", "--language", "en"])
            .expect("arguments should parse");

        assert!(cli.pretty);
        assert_eq!(cli.language.as_deref(), Some("en"));
        let Command::Board(args) = cli.command else {
            panic!("expected board command");
        };
        assert_eq!(args.symbols, vec!["VNM", "FPT"]);
    }

    #[test]
    fn events_type_is_optional() {
        let cli = Cli::try_parse_from(["vnkbs", "events", "VNM", "--type", "2", "--size", "5"])
            .expect("arguments should parse");

        let Command::Events(args) = cli.command else {
            panic!("expected events command");
        };
        assert_eq!(args.event_type, Some(2));
        assert_eq!(args.paged.size, 5);
        assert_eq!(args.paged.page, 1);
    }
}
