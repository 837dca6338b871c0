//! # Cart State
//!
//! Thread-safe wrapper around the session cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: multiple UI actions may touch
//! the cart concurrently, and only one should modify it at a time. Cart
//! operations are quick, so a `Mutex` is preferred over a `RwLock`.

use std::sync::{Arc, Mutex};

use veld_core::checkout::CheckoutTotals;
use veld_core::Cart;

/// Managed cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Computes checkout totals for the current cart contents.
    pub fn totals(&self) -> CheckoutTotals {
        self.with_cart(|cart| CheckoutTotals::compute(cart.subtotal()))
    }
}
