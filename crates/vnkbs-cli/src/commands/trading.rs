use serde_json::Value;
use vnkbs_core::KbsClient;

use crate::cli::{BoardArgs, SymbolArg};
use crate::error::CliError;

pub async fn board(args: &BoardArgs, client: &KbsClient) -> Result<Value, CliError> {
    let entries = client.trading().price_board(&args.symbols).await?;
    Ok(serde_json::to_value(entries)?)
}

pub async fn price(args: &SymbolArg, client: &KbsClient) -> Result<Value, CliError> {
    let entry = client.trading().price(&args.symbol).await?;
    Ok(serde_json::to_value(entry)?)
}
