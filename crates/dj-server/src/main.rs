mod cli;
mod config;
mod http;
mod serve;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommands};
use config::DjConfig;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Config file (defaults if absent) with `--data-dir` / `--http-addr` applied.
fn effective_config(
    path: &Path,
    data_dir: Option<PathBuf>,
    http_addr: Option<SocketAddr>,
) -> anyhow::Result<DjConfig> {
    let mut config = DjConfig::load_or_default(path)?;
    if let Some(data_dir) = data_dir {
        config.server.data_dir = data_dir;
    }
    if let Some(addr) = http_addr {
        config.server.http_addr = addr.to_string();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            let config = effective_config(&cli.config, cli.data_dir, cli.http_addr)?;
            serve::run(config).await
        }
        Commands::Ingest(args) => cli::ingest::run(args, &cli.server).await,
        Commands::Briefing(args) => cli::briefing::run(args, &cli.server).await,
        Commands::Config(ConfigCommands::Validate) => cli::config_cmd::validate(&cli.config),
        Commands::Config(ConfigCommands::Show) => {
            let config = effective_config(&cli.config, cli.data_dir, cli.http_addr)?;
            cli::config_cmd::show(&config)
        }
    }
}
