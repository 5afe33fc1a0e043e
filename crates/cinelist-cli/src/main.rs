/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Backend operation result printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cinelist_cli::{Cli, CliConfig, commands};
use cinelist_client::CineListClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    info!(
        backend_url = %config.client.backend_url,
        reset_password_base = ?config.client.reset_password_base,
        "configuration loaded"
    );

    let client = CineListClient::with_config(config.client).context("build client")?;
    if let Some(cookie) = args.session_cookie.or(config.session_cookie) {
        debug!("seeding session cookie");
        client.session().set_cookie(&cookie);
    }

    if let Some(value) = commands::run(&client, args.command).await? {
        let rendered = serde_json::to_string_pretty(&value).context("render response")?;
        println!("{rendered}");
    }
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
