use std::sync::Arc;

use movie_info_api::{
    config::Config,
    create_router,
    services::{MovieDatabase, TmdbClient},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_info_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Server failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    if config.tmdb_api_key.is_empty() {
        tracing::warn!("TMDB_API_KEY is not set; upstream calls will be rejected");
    }

    let provider = TmdbClient::from_config(&config);
    tracing::info!(
        provider = provider.name(),
        api_url = %config.tmdb_api_url,
        "Movie database configured"
    );

    let state = AppState::new(Arc::new(provider));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server starting");
    axum::serve(listener, app).await?;

    Ok(())
}
