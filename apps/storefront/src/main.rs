//! Storefront entry point.
//!
//! Boots the app shell, reports store status and exits. A frontend binds
//! to the [`veld_storefront::App`] services; this binary doubles as a
//! smoke check for deployments.

use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use veld_storefront::{config::AppConfig, App};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Veld Storefront");

    let config = AppConfig::load()?;
    let app = App::bootstrap(config).await?;

    let catalog = app.db.products().list().await?;
    let faqs = app.db.faqs().list().await?;
    info!(
        products = catalog.len(),
        faqs = faqs.len(),
        theme = ?app.theme.current(),
        "Store ready"
    );

    match app.news.top_headlines(5).await {
        Ok(headlines) => info!(count = headlines.len(), "Headlines available"),
        // Headlines are optional; the store runs without them
        Err(e) => warn!(error = %e, "Headlines unavailable"),
    }

    app.db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=veld=trace` - Show trace for veld crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,veld=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
