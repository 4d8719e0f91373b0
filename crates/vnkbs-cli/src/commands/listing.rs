use serde::Serialize;
use serde_json::Value;
use vnkbs_core::KbsClient;

use crate::cli::{GroupArgs, IndustryArgs, SymbolsArgs};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct GroupDescription {
    name: &'static str,
    description: &'static str,
}

pub async fn symbols(args: &SymbolsArgs, client: &KbsClient) -> Result<Value, CliError> {
    let listing = client.listing();
    let symbols = if args.all {
        listing.all_listings().await?
    } else {
        listing.all_symbols().await?
    };
    Ok(serde_json::to_value(symbols)?)
}

pub async fn group(args: &GroupArgs, client: &KbsClient) -> Result<Value, CliError> {
    let members = client.listing().symbols_by_group(&args.group).await?;
    Ok(serde_json::to_value(members)?)
}

pub fn groups(client: &KbsClient) -> Result<Value, CliError> {
    let groups = client
        .listing()
        .supported_groups()
        .into_iter()
        .map(|(name, description)| GroupDescription { name, description })
        .collect::<Vec<_>>();
    Ok(serde_json::to_value(groups)?)
}

pub async fn industries(client: &KbsClient) -> Result<Value, CliError> {
    let industries = client.listing().all_industries().await?;
    Ok(serde_json::to_value(industries)?)
}

pub async fn industry(args: &IndustryArgs, client: &KbsClient) -> Result<Value, CliError> {
    let members = client.listing().symbols_by_industry(args.code).await?;
    Ok(serde_json::to_value(members)?)
}
