use anyhow::{Context, Result};
use bike_rental_backend::api::{router, AppState};
use bike_rental_backend::config::Config;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting bike rental API server...");

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    info!(
        "Configuration loaded (locale: {}, currency: {})",
        config.display.locale, config.display.currency_suffix
    );

    let db = match &config.database_url {
        Some(url) => {
            info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            info!("Database connected");
            Some(pool)
        }
        None => {
            warn!("DATABASE_URL not set - booking and bike routes will answer 503");
            None
        }
    };

    let app = router(AppState::new(db, config.display.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
