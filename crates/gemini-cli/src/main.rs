/*
[INPUT]:  CLI arguments, YAML configuration file, GEMINI_* environment variables
[OUTPUT]: Pretty-printed JSON result of one Gemini REST call
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output format
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gemini_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "gemini-cli", version, about = "Gemini exchange REST client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and print the request instead of sending it
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?;
    info!(
        environment = ?config.environment,
        authenticated = config.has_credentials(),
        dry_run = args.dry_run,
        "configuration loaded"
    );

    if args.command.is_private() && !config.has_credentials() {
        bail!("this command needs API credentials (config file or GEMINI_API_KEY / GEMINI_API_SECRET)");
    }

    let client = config.build_client()?;

    let output = if args.dry_run {
        info!("dry-run requested; request not sent");
        args.command.plan_for(&client)?
    } else {
        args.command.run(&client).await?
    };

    println!("{}", serde_json::to_string_pretty(&output).context("render output")?);
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

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let config = match path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    config.with_env_overrides()
}
