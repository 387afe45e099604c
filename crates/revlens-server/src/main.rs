mod api;
mod middleware;
mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use revlens_fetch::DocumentFetcher;
use revlens_sentiment::LexiconScorer;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = revlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let fetcher = DocumentFetcher::new(
        config.fetch_timeout_secs,
        config.fetch_user_agent.as_deref(),
        config.fetch_max_retries,
        config.fetch_retry_backoff_base_secs,
    )?;
    let app = build_app(AppState {
        fetcher: Arc::new(fetcher),
        scorer: LexiconScorer::new(),
        max_reviews: config.max_reviews,
    });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting revlens server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
