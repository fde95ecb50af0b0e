//! relsimd — serves one simulated application version.
//!
//! Behavior is chosen entirely by environment variables read at startup:
//!
//! | Variable | Default | Effect |
//! |---|---|---|
//! | `APP_VERSION` | `v1.0.0` | Reported version; selects the fault profile |
//! | `DEPLOYMENT_CHANNEL` | `stable` | Banner on the status page |
//! | `PORT` | `8080` | Listen port |
//! | `RUST_LOG` | `info,relsim=debug` | Log filter |
//!
//! # Usage
//!
//! ```text
//! APP_VERSION=v1.2.0 DEPLOYMENT_CHANNEL=canary PORT=8081 relsimd
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use relsim_api::{ApiState, build_router};
use relsim_core::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,relsim=debug".parse().unwrap()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };

    run(config).await
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!(
        port = config.port,
        version = %config.version,
        channel = %config.channel,
        error_rate = config.profile.error_rate,
        latency_ms = config.profile.latency_ms,
        "starting server"
    );

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind listener");
            return Err(e).with_context(|| format!("binding {addr}"));
        }
    };

    let router = build_router(ApiState::new(config));

    info!(%addr, "listening");

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("relsimd stopped");
    Ok(())
}
