//! Balanced MCP Server
//!
//! A Model Context Protocol server for the Balanced contracts on ICON.

use rmcp::ServiceExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use balanced_client::{
    hooks::{self, CollateralRefresher, FeesRefresher, PollingHook},
    BalancedServer, Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("Starting Balanced MCP Server");

    let server = BalancedServer::from_config(&config)?;
    let client = server.client().clone();
    let store = server.store().clone();

    if let Err(e) = hooks::fetch_ratio(&client, &store).await {
        tracing::warn!(error = %e, "Initial sICX/ICX rate fetch failed");
    }

    // Pollers stay bound for the lifetime of the server
    let mut fees_poller = PollingHook::with_period(
        FeesRefresher::new(client.clone(), store.clone()),
        config.poll_interval,
    );
    let mut collateral_poller =
        PollingHook::with_period(CollateralRefresher::new(client, store), config.poll_interval);
    fees_poller.bind(config.account.as_deref());
    collateral_poller.bind(config.account.as_deref());

    // Run with stdio transport
    let transport = rmcp::transport::stdio();
    let running = server.serve(transport).await?;

    // Wait for the server to finish
    running.waiting().await?;

    fees_poller.unbind();
    collateral_poller.unbind();

    Ok(())
}
