//! SA CLI - Command line tool for querying store analytics.

use clap::Parser;
use log::debug;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "sa-cli",
    version,
    about = "Store analytics toolkit"
)]
struct Cli {
    /// Backend origin
    #[arg(long, env = "SA_API_URL", default_value = "http://localhost:8080", global = true)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: sa_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Using backend at {}", cli.base_url);
    let client = sa_cmd::build_client(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    sa_cmd::run(&client, cli.command).await
}
