//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use gradebook_core::api::ApiClient;
use gradebook_core::config::{self, Config};
use gradebook_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(version)]
#[command(about = "Terminal client for the student grade records service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root of the REST API (overrides GRADEBOOK_API_BASE and the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check that the backend is reachable and report its status
    Health,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Store the API root in the config file
    SetApiBase {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_base } = cli;

    match command {
        None => {
            let (config, client, _log_guard) = connect(api_base.as_deref())?;
            commands::tui::run(&config, client).await
        }
        Some(Commands::Health) => {
            let (_, client, _log_guard) = connect(api_base.as_deref())?;
            commands::health::run(&client).await
        }

        // Config commands must work even when the config file is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetApiBase { url } => commands::config::set_api_base(&url),
        },
    }
}

/// Loads config, starts file logging, and builds the API client.
///
/// The returned guard must outlive the command so buffered logs are flushed.
fn connect(api_base: Option<&str>) -> Result<(Config, ApiClient, logging::WorkerGuard)> {
    let config = Config::load().context("load config")?;
    let log_guard = logging::init(&config::paths::logs_dir(), &config.log_level)
        .context("init logging")?;

    let base_url = config.effective_api_base(api_base)?;
    let client = ApiClient::new(&base_url).context("create API client")?;
    Ok((config, client, log_guard))
}
