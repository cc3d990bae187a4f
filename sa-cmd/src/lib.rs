//! Command implementations for the store analytics CLI.
//!
//! Every subcommand is a read-only query against the analytics backend.
//! Requests are issued one after another on the caller's runtime.

use anyhow::Context;
use clap::Subcommand;
use sa_api::ApiClient;
use sa_data::history::DateRange;
use std::time::Duration;

pub mod export;
pub mod lookup;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// List organizations
    Orgs,

    /// List the stores of one organization
    Stores {
        /// Organization id
        #[arg(long)]
        org: String,
    },

    /// Totals, CTR, monthly history and top templates for a store
    Summary {
        /// Store id
        #[arg(long)]
        store: String,

        /// History window: 30, 90, 180 or all
        #[arg(long, default_value = "90")]
        range: DateRange,
    },

    /// CTR forecast for a store
    Predict {
        /// Store id
        #[arg(long)]
        store: String,

        /// Days to forecast (1 to 365)
        #[arg(long, default_value_t = 30)]
        days: u32,
    },

    /// Messages sent over the last few days
    Recent {
        /// Store id
        #[arg(long)]
        store: String,

        /// Window length in days
        #[arg(long, default_value_t = 30)]
        days: u32,
    },

    /// Write the merged monthly history of a store to CSV
    ExportHistory {
        /// Store id
        #[arg(long)]
        store: String,

        /// Output CSV path (month,label,messages,clicks)
        #[arg(short = 'o', long)]
        out: String,

        /// History window: 30, 90, 180 or all
        #[arg(long, default_value = "all")]
        range: DateRange,
    },
}

/// Backend client with a request timeout.
pub fn build_client(base_url: &str, timeout: Duration) -> anyhow::Result<ApiClient> {
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")?;
    Ok(ApiClient::with_client(base_url, http))
}

pub async fn run(client: &ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Orgs => lookup::run_orgs(client).await,
        Command::Stores { org } => lookup::run_stores(client, &org).await,
        Command::Summary { store, range } => report::run_summary(client, &store, range).await,
        Command::Predict { store, days } => report::run_predict(client, &store, days).await,
        Command::Recent { store, days } => report::run_recent(client, &store, days).await,
        Command::ExportHistory { store, out, range } => {
            export::run_export_history(client, &store, &out, range).await
        }
    }
}
