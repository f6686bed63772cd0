use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use vsp_gateway::{GatewayConfig, build_router, logging};

/// VSP API gateway
#[derive(Parser, Debug)]
#[command(name = "vsp-gateway", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = GatewayConfig::load(args.config.as_deref())?;

    logging::init(&cfg.logging)?;

    let bind_addr = cfg.bind_addr;
    let prefix = cfg.api_auth.path_prefix.clone();
    let router = build_router(cfg);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, path_prefix = %prefix, "vsp gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("vsp gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
