//! # veld-db: Database Layer for Veld Storefront
//!
//! This crate provides database access for the Veld Storefront.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Veld Storefront Data Flow                           │
//! │                                                                         │
//! │  App Shell (CheckoutService, state containers)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                      veld-db (THIS CRATE)                       │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │    │
//! │  │   │   Database    │    │ Repositories  │    │  Migrations  │    │    │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │    │    │
//! │  │   │               │    │ OrderRepo     │    │              │    │    │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_init.sql │    │    │
//! │  │   │ Connection    │    │ FaqRepo       │    │              │    │    │
//! │  │   │ Management    │    │ WishlistRepo  │    │              │    │    │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘    │    │
//! │  │                                                                 │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │                       SQLite Database (WAL)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (order, product, faq, wishlist)
//! - [`import`] - CSV bulk import for the admin catalog path
//!
//! ## Usage
//!
//! ```rust,ignore
//! use veld_db::{Database, DbConfig};
//!
//! let config = DbConfig::new("path/to/veld.db");
//! let db = Database::new(config).await?;
//!
//! let history = db.orders().get_by_user_id("user-uid").await?;
//! let catalog = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod import;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use import::{import_faqs_csv, import_products_csv, ImportSummary, RowError};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::faq::{FaqRepository, NewFaq};
pub use repository::order::{NewOrder, NewOrderItem, OrderRepository};
pub use repository::product::{NewProduct, ProductRepository, ProductUpdate};
pub use repository::wishlist::WishlistRepository;
