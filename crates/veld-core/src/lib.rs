//! # veld-core: Pure Business Logic for Veld Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Veld Storefront Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                  apps/storefront (App Shell)                    │    │
//! │  │   AuthState ──► CartState ──► CheckoutService ──► Confirmation  │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ veld-core (THIS CRATE) ★                        │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   types   │  │   money   │  │ checkout  │  │   cart    │    │    │
//! │  │   │  Product  │  │   Money   │  │  Totals   │  │   Cart    │    │    │
//! │  │   │   Order   │  │  VAT calc │  │  Wizard   │  │ Wishlist  │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                    veld-db (Database Layer)                     │    │
//! │  │             SQLite queries, migrations, repositories            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, Faq, statuses, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Shopping cart with merge-on-add semantics
//! - [`wishlist`] - Idempotent wishlist set semantics
//! - [`checkout`] - Total computation and the wizard state machine
//! - [`validation`] - Explicit step/input preconditions
//! - [`format`] - Currency/date display helpers
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are ZAR cents (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use veld_core::checkout::CheckoutTotals;
//! use veld_core::money::Money;
//!
//! // cart subtotal R700.00
//! let totals = CheckoutTotals::compute(Money::from_cents(70_000));
//!
//! // R700 ≤ R1500 so the flat shipping fee applies; 15% VAT on subtotal
//! assert_eq!(totals.shipping_cents, 15_000);
//! assert_eq!(totals.tax_cents, 10_500);
//! assert_eq!(totals.total().to_string(), "R955.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use veld_core::Money` instead of
// `use veld_core::money::Money`

pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutStep, CheckoutTotals, CheckoutWizard, PaymentSelection};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Free-shipping threshold in ZAR cents (R1500.00).
///
/// Shipping is free only STRICTLY ABOVE this subtotal; a subtotal of
/// exactly R1500.00 still pays the flat fee.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 150_000;

/// Flat shipping fee in ZAR cents (R150.00), charged at or below the
/// free-shipping threshold.
pub const FLAT_SHIPPING_CENTS: i64 = 15_000;

/// South African VAT rate in basis points (15%).
pub const VAT_RATE_BPS: u32 = 1_500;

/// Maximum unique line items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps order records a sane size.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
