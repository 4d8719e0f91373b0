use serde_json::Value;
use vnkbs_core::KbsClient;

use crate::cli::FinanceArgs;
use crate::error::CliError;

/// Prints `null` when the provider has no report for the symbol.
pub async fn run(args: &FinanceArgs, client: &KbsClient) -> Result<Value, CliError> {
    let report = client
        .finance(&args.symbol)?
        .report_by_name(&args.report, &args.period)
        .await?;
    Ok(serde_json::to_value(report)?)
}
