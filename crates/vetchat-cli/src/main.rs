//! vetchat CLI entry point.
//!
//! Binary name: `vetchat`
//!
//! Parses arguments, sets up tracing, resolves the server target, then
//! runs the interactive screening chat session.

mod chat;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vetchat_infra::config::{load_client_config, resolve_data_dir};

/// Chat with a job-applicant screening bot.
#[derive(Parser)]
#[command(name = "vetchat", version, about, long_about = None)]
struct Cli {
    /// User identifier for the screening conversation.
    #[arg(long, env = "VETCHAT_USER_ID")]
    user_id: String,

    /// Job identifier the application is screened against.
    #[arg(long, env = "VETCHAT_JOB_ID")]
    job_id: String,

    /// WebSocket server URL (falls back to config.toml, then ws://localhost:3000).
    #[arg(long, env = "VETCHAT_SERVER")]
    server: Option<String>,

    /// Suppress all output except errors.
    #[arg(long)]
    quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,vetchat_cli=debug,vetchat_core=debug,vetchat_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let server_url = match cli.server {
        Some(server) => server,
        None => load_client_config(&resolve_data_dir()).await.server_url,
    };

    chat::loop_runner::run_chat(&server_url, &cli.user_id, &cli.job_id).await
}
