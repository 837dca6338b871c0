//! # Domain Types
//!
//! Core domain types used throughout Veld Storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Product      │   │     Order       │   │   OrderItem     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  product_id     │        │
//! │  │  sku (business) │   │  user_id        │   │  name (frozen)  │        │
//! │  │  name           │   │  status         │   │  price (frozen) │        │
//! │  │  price_cents    │   │  total_cents    │   │  quantity       │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │   OrderStatus   │   │ PaymentStatus   │   │ PaymentMethod   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  Processing     │   │  Pending        │   │  Credit         │        │
//! │  │  Shipped        │   │  Paid           │   │  Ozow           │        │
//! │  │  Delivered      │   │  Failed         │   │  Eft            │        │
//! │  │  Cancelled      │   └─────────────────┘   └─────────────────┘        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business ID where one exists (product `sku`) - human-readable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown in the catalog and on order lines.
    pub name: String,

    /// Optional long description for the product detail view.
    pub description: Option<String>,

    /// Catalog category used for filtering.
    pub category: String,

    /// Price in ZAR cents (smallest currency unit).
    pub price_cents: i64,

    /// Optional hosted image URL.
    pub image_url: Option<String>,

    /// Units on hand.
    pub stock: i64,

    /// Whether the product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the product can be shown and purchased.
    pub fn is_available(&self) -> bool {
        self.is_active && self.stock > 0
    }
}

// =============================================================================
// FAQ
// =============================================================================

/// A frequently-asked question entry, grouped by category for filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Category used by the FAQ page filter ("orders", "shipping", ...).
    pub category: String,
    /// Sort position within its category.
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of an order.
///
/// Created as `Processing`; later transitions are performed by backend/admin
/// processes, never by the storefront client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order received, not yet dispatched.
    Processing,
    /// Order handed to the courier.
    Shipped,
    /// Order delivered to the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting settlement.
    Pending,
    /// Settled successfully.
    Paid,
    /// Settlement failed.
    Failed,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// The payment rail chosen at checkout.
///
/// Only this discriminant is ever persisted; card numbers and CVVs stay in
/// the checkout wizard and never reach the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit/debit card.
    Credit,
    /// Ozow instant EFT redirect.
    Ozow,
    /// Manual EFT with a payment reference.
    Eft,
}

// =============================================================================
// Shipping Address
// =============================================================================

/// Delivery address captured on the shipping step.
///
/// All fields are plain strings and required non-empty at submission;
/// see [`crate::validation::validate_shipping_address`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Created once at checkout completion. `status` and `payment_status` are
/// mutated only by backend/admin processes; the client only re-reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    /// Line items frozen at time of purchase.
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub shipping_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
/// Uses snapshot pattern to freeze product data at time of purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    /// Product name at time of purchase (frozen).
    pub name: String,
    /// Unit price in cents at time of purchase (frozen).
    pub unit_price_cents: i64,
    /// Quantity purchased.
    pub quantity: i64,
    /// Position within the order (stable display ordering).
    pub position: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents * self.quantity)
    }
}

// =============================================================================
// Wishlist Entry
// =============================================================================

/// A saved wishlist entry, persisted remotely per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub product_id: String,
    /// Product name at time of saving (frozen).
    pub name: String,
    /// Price in cents at time of saving (frozen).
    pub price_cents: i64,
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_payment_status_default() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn test_order_item_line_total() {
        let item = OrderItem {
            id: "i1".to_string(),
            order_id: "o1".to_string(),
            product_id: "p1".to_string(),
            name: "Rooibos Tea".to_string(),
            unit_price_cents: 10_000,
            quantity: 2,
            position: 0,
        };
        assert_eq!(item.line_total().cents(), 20_000);
    }

    #[test]
    fn test_product_availability() {
        let now = Utc::now();
        let mut product = Product {
            id: "p1".to_string(),
            sku: "TEA-001".to_string(),
            name: "Rooibos Tea".to_string(),
            description: None,
            category: "pantry".to_string(),
            price_cents: 4999,
            image_url: None,
            stock: 10,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        assert!(product.is_available());

        product.stock = 0;
        assert!(!product.is_available());

        product.stock = 5;
        product.is_active = false;
        assert!(!product.is_available());
    }
}
