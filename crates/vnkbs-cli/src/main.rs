mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vnkbs_core::{ClientConfig, KbsClient};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = load_config(cli)?;
    tracing::debug!(
        iis = config.base_url_iis(),
        sas = config.base_url_sas(),
        language = %config.language(),
        "client configured"
    );
    let client = KbsClient::new(config)?;

    let data = commands::run(&cli.command, &client).await?;
    output::render(&data, cli.pretty)
}

/// Environment configuration, with `--language` taking precedence over
/// `VNKBS_LANGUAGE`.
fn load_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let language = cli.language.as_deref();
    let config = ClientConfig::from_lookup(|key| match (key, language) {
        ("VNKBS_LANGUAGE", Some(language)) => Some(language.to_owned()),
        _ => std::env::var(key).ok(),
    })?;
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
