use serde_json::Value;
use vnkbs_core::KbsClient;

use crate::cli::{HistoryArgs, IntradayArgs};
use crate::error::CliError;

pub async fn history(args: &HistoryArgs, client: &KbsClient) -> Result<Value, CliError> {
    let bars = client
        .quote(&args.symbol)?
        .history(args.start, args.end, &args.interval)
        .await?;
    Ok(serde_json::to_value(bars)?)
}

pub async fn intraday(args: &IntradayArgs, client: &KbsClient) -> Result<Value, CliError> {
    let trades = client
        .quote(&args.symbol)?
        .intraday(args.page, args.limit)
        .await?;
    Ok(serde_json::to_value(trades)?)
}
