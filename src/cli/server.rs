use std::sync::Arc;

use anyhow::Result;
use arcalab_blog::ContentStore;
use arcalab_notification::{EmailNotifier, EmailService, LogNotifier, Notifier};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::routes::AppState;

fn notifier(config: &crate::config::Config) -> Result<Arc<dyn Notifier>> {
    if !config.email.enabled {
        tracing::info!("Email disabled, submissions are logged only");
        return Ok(Arc::new(LogNotifier));
    }

    let service = EmailService::new(&config.email)?;

    Ok(Arc::new(EmailNotifier::new(
        service,
        config.email.contact_address.to_owned(),
        config.booking.timezone_label.to_owned(),
    )))
}

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting arcalab server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let content = ContentStore::load()?;

    let state = AppState {
        notifier: notifier(&config)?,
        content: Arc::new(content),
        config: Arc::new(config),
    };

    let app = crate::routes::router(state)
        // no-store for pages, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
