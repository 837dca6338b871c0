//! # Veld Storefront Shell
//!
//! Composition root for the storefront: wires configuration, the database,
//! session state and services together for a frontend to drive.
//!
//! ## Module Organization
//! ```text
//! veld_storefront/
//! ├── lib.rs          ◄─── You are here (App bootstrap)
//! ├── config.rs       ◄─── Env-based configuration
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── auth.rs     ◄─── Signed-in user
//! │   ├── cart.rs     ◄─── Session cart
//! │   ├── wishlist.rs ◄─── Persisted wishlist mirror
//! │   └── theme.rs    ◄─── Light/dark toggle
//! ├── checkout.rs     ◄─── Checkout orchestration
//! ├── news.rs         ◄─── Headline fetching
//! └── error.rs        ◄─── API error type
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod news;
pub mod state;

use tracing::info;

use checkout::CheckoutService;
use config::AppConfig;
use news::NewsClient;
use state::{AuthState, CartState, ThemeState, WishlistState};
use veld_db::{Database, DbConfig};

/// The assembled application: one of each state container and service.
#[derive(Debug, Clone)]
pub struct App {
    pub config: AppConfig,
    pub db: Database,
    pub auth: AuthState,
    pub cart: CartState,
    pub wishlist: WishlistState,
    pub theme: ThemeState,
    pub checkout: CheckoutService,
    pub news: NewsClient,
}

impl App {
    /// Bootstraps the application from configuration.
    ///
    /// ## Startup Sequence
    /// 1. Connect to SQLite (creates the file, runs migrations)
    /// 2. Build the session state containers
    /// 3. Build services (checkout, news)
    pub async fn bootstrap(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::new(DbConfig::new(&config.database_path)).await?;
        info!("Database connected and migrations applied");

        let checkout = CheckoutService::new(&db);
        let news = NewsClient::new(&config)?;

        Ok(App {
            auth: AuthState::new(),
            cart: CartState::new(),
            wishlist: WishlistState::new(),
            theme: ThemeState::new(config.default_theme),
            checkout,
            news,
            db,
            config,
        })
    }
}
