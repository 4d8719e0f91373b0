mod company;
mod finance;
mod listing;
mod quote;
mod trading;

use serde_json::Value;
use vnkbs_core::KbsClient;

use crate::cli::Command;
use crate::error::CliError;

/// Runs one sub-command and returns its JSON payload.
pub async fn run(command: &Command, client: &KbsClient) -> Result<Value, CliError> {
    match command {
        Command::Symbols(args) => listing::symbols(args, client).await,
        Command::Group(args) => listing::group(args, client).await,
        Command::Groups => listing::groups(client),
        Command::Industries => listing::industries(client).await,
        Command::Industry(args) => listing::industry(args, client).await,
        Command::History(args) => quote::history(args, client).await,
        Command::Intraday(args) => quote::intraday(args, client).await,
        Command::Profile(args) => company::profile(args, client).await,
        Command::Events(args) => company::events(args, client).await,
        Command::News(args) => company::news(args, client).await,
        Command::Insider(args) => company::insider(args, client).await,
        Command::Finance(args) => finance::run(args, client).await,
        Command::Board(args) => trading::board(args, client).await,
        Command::Price(args) => trading::price(args, client).await,
    }
}
