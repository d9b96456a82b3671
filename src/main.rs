// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up diagnostic logging (stderr, silent unless RUST_LOG is set)
// 2. Parse command-line arguments using clap
// 3. Build the GitHub client and print the user's recent activity
//
// API problems (unknown user, network down, rate limited...) are printed as
// plain messages by the presenter; the process still exits normally.
// =============================================================================

mod cli;        // src/cli.rs - command-line parsing
mod github;     // src/github/ - GitHub REST API client
mod presenter;  // src/presenter.rs - event formatting and the listing itself

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use github::{ActivityClient, ClientConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()).await {
        // Only reached when stdout can't be written or the client can't be built
        eprintln!("Error: {:#}", e);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut out = io::stdout();

    let Some(username) = cli.username else {
        presenter::print_usage(&mut out).context("failed to write usage")?;
        return Ok(());
    };

    let mut client =
        ActivityClient::new(ClientConfig::default()).context("failed to set up GitHub client")?;

    presenter::show_activity(&mut client, &username, &mut out)
        .await
        .context("failed to write output")?;

    Ok(())
}

// Logs go to stderr so they never mix with the activity listing on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
