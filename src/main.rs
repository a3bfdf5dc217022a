//! Server binary: reads config from the environment, prepares the variant's
//! database and serves the rental API.

use movie_rental::{app, apply_migrations, store, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("movie_rental=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(variant = %config.variant, database = %config.database_url, "starting");

    let pool = store::connect(&config.database_url, config.max_connections).await?;
    apply_migrations(&pool, config.variant).await?;

    let state = AppState::new(pool, config.variant);
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
