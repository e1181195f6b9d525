pub mod briefing;
pub mod config_cmd;
pub mod ingest;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feedback-dj")]
#[command(version, about = "Collect product feedback and serve a daily briefing")]
pub struct Cli {
    /// Path to feedback-dj.toml
    #[arg(
        long,
        global = true,
        env = "FEEDBACK_DJ_CONFIG",
        default_value = "feedback-dj.toml"
    )]
    pub config: PathBuf,

    /// Path to data directory (overrides config file)
    #[arg(long, global = true, env = "FEEDBACK_DJ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// HTTP listen address (overrides config file)
    #[arg(long, global = true, env = "FEEDBACK_DJ_HTTP_ADDR")]
    pub http_addr: Option<SocketAddr>,

    /// Running server to talk to, for client commands
    #[arg(
        long,
        global = true,
        env = "FEEDBACK_DJ_ADDR",
        default_value = "http://localhost:8787"
    )]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve,
    /// Submit one piece of feedback to a running server
    Ingest(IngestArgs),
    /// Print the current briefing from a running server
    Briefing(BriefingArgs),
    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Feedback text
    #[arg(long)]
    pub text: String,

    /// Where the feedback came from (defaults to "manual" server-side)
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Args, Debug)]
pub struct BriefingArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The briefing as served, with "(cached)" on stderr when it came from cache.
    #[default]
    Text,
    /// `{"briefing": ..., "cached": ...}`
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Check the config file for problems
    Validate,
    /// Print the effective configuration
    Show,
}
