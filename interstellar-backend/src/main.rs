//! Interstellar backend server
//!
//! Loads configuration, installs tracing and serves the validation
//! response API.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

mod cli;
mod tracing_setup;

use cli::CliArgs;
use tracing_setup::install_tracing_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = interstellar_config::load_config(args.config_path.as_deref())
        .context("failed to load configuration")?;
    args.apply_overrides(&mut config);
    interstellar_config::validate_config(&config).context("invalid configuration")?;

    install_tracing_from_config(&config.logging)?;

    let addr = parse_bind_address(&config.server.host, config.server.port);
    tracing::info!(
        %addr,
        config_path = ?args.config_path,
        log_level = %config.logging.level,
        json_logs = config.logging.json,
        "starting interstellar backend"
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let app = interstellar_backend::build_router();

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Parse host:port into a SocketAddr, with fallback to 0.0.0.0.
fn parse_bind_address(host: &str, port: u16) -> SocketAddr {
    host.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .or_else(|_| host.parse::<SocketAddr>())
        .or_else(|_| host.parse::<Ipv6Addr>().map(|ip| SocketAddr::new(IpAddr::V6(ip), port)))
        .unwrap_or_else(|_| {
            tracing::warn!(host, "host is not an address, binding all interfaces");
            SocketAddr::from(([0, 0, 0, 0], port))
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
