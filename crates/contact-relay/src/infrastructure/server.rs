//! HTTP server lifecycle: bind, serve, and shut down gracefully.
//!
//! Each request runs in its own Tokio task (axum/hyper handle that), and the
//! relay holds no shared mutable state, so concurrent submissions proceed
//! independently and may complete in any order.
//!
//! Shutdown is driven by a future supplied by the caller (`main.rs` passes
//! a Ctrl+C listener).  When it resolves, the server stops accepting new
//! connections and waits for in-flight requests to finish.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::application::{MailTransport, RelayService};
use crate::domain::config::{RelayConfig, RelaySettings};
use crate::infrastructure::http::{build_router, AppState};

/// Binds `config.bind_addr` and serves the relay until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (e.g., the port is
/// already in use) or if the server fails while running.
pub async fn run_server<F>(
    config: RelayConfig,
    transport: Arc<dyn MailTransport>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    serve(listener, config.relay, transport, shutdown).await
}

/// Serves the relay on an already-bound listener.
///
/// Split from [`run_server`] so tests can bind port 0 and learn the port.
///
/// # Errors
///
/// Returns an error if the server fails while running.
pub async fn serve<F>(
    listener: TcpListener,
    settings: RelaySettings,
    transport: Arc<dyn MailTransport>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .context("failed to read listener address")?;
    info!(inbox = %settings.inbox, "contact relay listening on {local_addr}");

    let router = build_router(AppState::new(RelayService::new(settings, transport)));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    info!("contact relay stopped accepting connections");
    Ok(())
}
