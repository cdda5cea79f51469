use miami_traffic_report::{config, report, routes, state};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Loaded before the subscriber so `.env` can set RUST_LOG.
    let dotenv_error = config::dotenv_failure(dotenvy::dotenv());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "miami_traffic_report=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(e) = dotenv_error {
        tracing::warn!(error = %e, ".env not loaded; using process environment only");
    }

    let config = config::AppConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        title = %config.site.title,
        "configuration loaded"
    );

    let app = routes::app(state::AppState::new(config.site.clone()));
    let listener = TcpListener::bind(config.socket_addr()).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, sections = report::Section::ALL.len(), "report site listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("report site stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
