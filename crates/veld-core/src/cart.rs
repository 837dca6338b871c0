//! # Cart Module
//!
//! The shopping cart: pure, session-scoped state with merge-on-add
//! semantics.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Storefront Action             Cart Change                              │
//! │  ─────────────────             ───────────                              │
//! │                                                                         │
//! │  Add to cart ────────────────► items.push(item) or quantity += n        │
//! │                                                                         │
//! │  Change quantity ────────────► items[i].quantity = n (0 removes)        │
//! │                                                                         │
//! │  Remove ─────────────────────► items.remove(i)                          │
//! │                                                                         │
//! │  Order placed ───────────────► items.clear()                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `product_id` (adding the same product merges
//!   quantities)
//! - Quantity is always > 0 (setting quantity to 0 removes the item)
//! - At most [`crate::MAX_CART_ITEMS`] unique items
//! - Per-item quantity at most [`crate::MAX_ITEM_QUANTITY`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Price Freezing
/// The price is captured when the item is added. If the catalog price
/// changes afterwards, this cart line retains the original price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (UUID).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this item was added to cart.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a catalog product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Session-scoped: lives for the browser session, cleared when an order is
/// placed. Not persisted remotely (unlike the wishlist).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// The quantity must be positive and within
    /// [`crate::MAX_ITEM_QUANTITY`]; merging onto an existing line is
    /// capped the same way.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Updates the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - If quantity is 0: removes the item
    /// - If quantity is negative or above the cap: returns a validation
    ///   error, leaving the cart unchanged
    /// - If product not found: returns an error
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        validate_quantity(quantity)?;

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::NotInCart(product_id.to_string())),
        }
    }

    /// Removes an item from the cart by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::NotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Membership test by product ID.
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (before shipping and VAT).
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            sku: format!("SKU-{}", id),
            name: format!("Product {}", id),
            description: None,
            category: "pantry".to_string(),
            price_cents,
            image_url: None,
            stock: 100,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 10_000); // R100.00

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().cents(), 20_000); // R200.00
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 10_000);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.item_count(), 1); // Still one unique item
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let product = test_product("1", 10_000);

        cart.add_item(&product, 2).unwrap();
        cart.update_quantity("1", 0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_remove_missing_item_errors() {
        let mut cart = Cart::new();
        let err = cart.remove_item("missing").unwrap_err();
        assert!(matches!(err, CoreError::NotInCart(_)));
    }

    #[test]
    fn test_cart_membership_and_clear() {
        let mut cart = Cart::new();
        let product = test_product("1", 10_000);

        cart.add_item(&product, 1).unwrap();
        assert!(cart.contains("1"));
        assert!(!cart.contains("2"));

        cart.clear();
        assert!(cart.is_empty());
        assert!(!cart.contains("1"));
    }

    #[test]
    fn test_cart_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product("1", 10_000);

        let err = cart.add_item(&product, MAX_ITEM_QUANTITY + 1).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(cart.is_empty());

        // Merging may not push an existing line over the cap either
        cart.add_item(&product, MAX_ITEM_QUANTITY).unwrap();
        let err = cart.add_item(&product, 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert_eq!(cart.total_quantity(), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_cart_rejects_nonpositive_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 10_000);

        assert!(matches!(
            cart.add_item(&product, 0).unwrap_err(),
            CoreError::Validation(_)
        ));
        assert!(matches!(
            cart.add_item(&product, -3).unwrap_err(),
            CoreError::Validation(_)
        ));
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().cents(), 0);

        cart.add_item(&product, 2).unwrap();
        assert!(matches!(
            cart.update_quantity("1", -5).unwrap_err(),
            CoreError::Validation(_)
        ));
        // A rejected update leaves the line as it was
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().cents(), 20_000);
    }

    #[test]
    fn test_cart_subtotal_spec_scenario() {
        // [{R100 × 2}, {R500 × 1}] → subtotal R700
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 10_000), 2).unwrap();
        cart.add_item(&test_product("2", 50_000), 1).unwrap();

        assert_eq!(cart.subtotal().cents(), 70_000);
    }
}
