use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe_backend::{
    api::create_router,
    config::Config,
    rpc::{RpcClient, RpcServer, TictactoeService},
    state::new_state,
};
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictactoe_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow() {
        if rx.changed().await.is_err() {
            return;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::parse();
    info!(?config, "Starting tic-tac-toe backend");

    let service = Arc::new(TictactoeService::new(new_state()));

    // Bind both listeners before serving; either failing aborts startup
    let rpc_server = RpcServer::bind(config.rpc_addr(), service)
        .await
        .with_context(|| format!("failed to listen on {}", config.rpc_addr()))?;
    let http_listener = tokio::net::TcpListener::bind(config.http_addr())
        .await
        .with_context(|| format!("failed to listen on {}", config.http_addr()))?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            // Keep the sender alive so the servers run until killed
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    let rpc_task =
        tokio::spawn(rpc_server.serve_with_shutdown(wait_for_shutdown(shutdown_rx.clone())));

    let gateway = Arc::new(RpcClient::with_timeout(
        config.gateway_endpoint(),
        config.rpc_timeout(),
    ));
    let app = create_router(gateway);

    info!(addr = %config.http_addr(), rpc_endpoint = %config.gateway_endpoint(), "REST gateway running");
    axum::serve(http_listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await
        .context("failed to serve HTTP")?;

    rpc_task
        .await
        .context("RPC server task panicked")?
        .context("failed to serve RPC")?;

    info!("Shut down cleanly");
    Ok(())
}
