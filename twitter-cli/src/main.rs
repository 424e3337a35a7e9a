mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    handle_account_command, handle_blocks_command, handle_friendships_command, run_setup,
    AccountCommands, BlocksCommands, Client, FriendshipsCommands,
};
use config::Config;
use output::{print_response, ErrorResponse, ExitCode, Response};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use twitter_client::{ReqwestClient, TwitterClient};

#[derive(Parser)]
#[command(name = "twitter")]
#[command(about = "A command-line interface for the Twitter REST API", long_about = None)]
struct Cli {
    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account credentials and settings
    #[command(subcommand)]
    Account(AccountCommands),
    /// Blocked users
    #[command(subcommand)]
    Blocks(BlocksCommands),
    /// Follow relationships
    #[command(subcommand)]
    Friendships(FriendshipsCommands),
    /// Store a bearer token in the config file
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays one JSON document per command
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let code = match cli.command {
        Commands::Setup => run_setup(config.api_url()).await?,
        Commands::Account(cmd) => match build_client(&config, cli.timeout) {
            Ok(client) => handle_account_command(&client, cmd).await?,
            Err(code) => code,
        },
        Commands::Blocks(cmd) => match build_client(&config, cli.timeout) {
            Ok(client) => handle_blocks_command(&client, cmd).await?,
            Err(code) => code,
        },
        Commands::Friendships(cmd) => match build_client(&config, cli.timeout) {
            Ok(client) => handle_friendships_command(&client, cmd).await?,
            Err(code) => code,
        },
    };

    if code != ExitCode::Success {
        tracing::debug!(%code, "command failed");
        std::process::exit(code.code());
    }
    Ok(())
}

/// Client for authenticated commands; reports a missing token the same way
/// API errors are reported.
fn build_client(config: &Config, timeout_secs: u64) -> std::result::Result<Client, ExitCode> {
    match config.require_token() {
        Ok(token) => {
            let http = ReqwestClient::with_timeout(Duration::from_secs(timeout_secs))
                .with_token(token.to_string());
            Ok(TwitterClient::with_base_url(http, config.api_url()))
        }
        Err(e) => {
            let resp = Response::<()>::error(ErrorResponse::validation_failed(e.to_string()), None);
            if let Err(print_err) = print_response(&resp) {
                tracing::error!(error = %print_err, "failed to print response");
            }
            Err(ExitCode::PermanentError)
        }
    }
}
