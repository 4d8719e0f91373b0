use serde_json::Value;
use vnkbs_core::KbsClient;

use crate::cli::{EventsArgs, PagedArgs, SymbolArg};
use crate::error::CliError;

pub async fn profile(args: &SymbolArg, client: &KbsClient) -> Result<Value, CliError> {
    let profile = client.company(&args.symbol)?.overview().await?;
    Ok(serde_json::to_value(profile)?)
}

pub async fn events(args: &EventsArgs, client: &KbsClient) -> Result<Value, CliError> {
    let events = client
        .company(&args.paged.symbol)?
        .events(args.event_type, args.paged.page, args.paged.size)
        .await?;
    Ok(serde_json::to_value(events)?)
}

pub async fn news(args: &PagedArgs, client: &KbsClient) -> Result<Value, CliError> {
    let news = client
        .company(&args.symbol)?
        .news(args.page, args.size)
        .await?;
    Ok(serde_json::to_value(news)?)
}

pub async fn insider(args: &PagedArgs, client: &KbsClient) -> Result<Value, CliError> {
    let trades = client
        .company(&args.symbol)?
        .insider_trading(args.page, args.size)
        .await?;
    Ok(serde_json::to_value(trades)?)
}
