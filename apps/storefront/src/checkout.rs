//! # Checkout Service
//!
//! Orchestrates the checkout flow: wizard lifecycle, order submission and
//! cart clearing.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Orchestration                            │
//! │                                                                         │
//! │  begin(cart)                                                            │
//! │     │  rejects an empty cart                                            │
//! │     ▼                                                                   │
//! │  CheckoutWizard  Shipping ──► Payment ──► Review                        │
//! │     │  (validation gates live in veld-core)                             │
//! │     ▼                                                                   │
//! │  place_order(wizard, auth, cart)                                        │
//! │     1. wizard must be on Review with valid data                         │
//! │     2. a signed-in user is required                                     │
//! │     3. totals computed from the cart snapshot                           │
//! │     4. order persisted (totals re-verified in veld-db)                  │
//! │     5. cart cleared ── ONLY on success                                  │
//! │                                                                         │
//! │  On any failure the wizard stays on Review with its data intact;        │
//! │  the user corrects and retries.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use veld_core::checkout::{CheckoutTotals, CheckoutWizard};
use veld_core::{CoreError, Order};
use veld_db::{Database, NewOrder, NewOrderItem, OrderRepository};

use crate::error::ApiError;
use crate::state::{AuthState, CartState};

/// Checkout orchestration over the order repository and session state.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    orders: OrderRepository,
}

impl CheckoutService {
    /// Creates a checkout service backed by the given database.
    pub fn new(db: &Database) -> Self {
        CheckoutService {
            orders: db.orders(),
        }
    }

    /// Starts a checkout for the current cart.
    ///
    /// An empty cart cannot enter checkout.
    pub fn begin(&self, cart: &CartState) -> Result<CheckoutWizard, ApiError> {
        if cart.with_cart(|c| c.is_empty()) {
            return Err(CoreError::EmptyCart.into());
        }
        Ok(CheckoutWizard::new())
    }

    /// Totals for the review step, computed from the live cart.
    pub fn review_totals(&self, cart: &CartState) -> CheckoutTotals {
        cart.totals()
    }

    /// Places the order.
    ///
    /// ## Preconditions
    /// - Wizard on the Review step with validated shipping and payment
    /// - A signed-in user
    /// - A non-empty cart
    ///
    /// ## On Success
    /// The order is persisted and the cart cleared.
    ///
    /// ## On Failure
    /// Nothing is persisted and the cart is left untouched; the wizard
    /// (owned by the caller) keeps its data, so the user stays on Review.
    pub async fn place_order(
        &self,
        wizard: &CheckoutWizard,
        auth: &AuthState,
        cart: &CartState,
    ) -> Result<Order, ApiError> {
        let (address, payment_method) = wizard.ready_for_submission()?;
        let user = auth.require_user()?;

        let items: Vec<NewOrderItem> = cart.with_cart(|c| {
            c.items
                .iter()
                .map(|i| NewOrderItem {
                    product_id: i.product_id.clone(),
                    name: i.name.clone(),
                    unit_price_cents: i.unit_price_cents,
                    quantity: i.quantity,
                })
                .collect()
        });
        if items.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let totals = cart.totals();

        let new_order = NewOrder {
            user_id: user.uid.clone(),
            items,
            totals,
            payment_method,
            shipping_address: address.clone(),
        };

        let order = match self.orders.create_order(new_order).await {
            Ok(order) => order,
            Err(e) => {
                warn!(user_id = %user.uid, error = %e, "Order submission failed");
                return Err(e.into());
            }
        };

        // Clear only after the order is durably written
        cart.with_cart_mut(|c| c.clear());

        info!(
            order_id = %order.id,
            user_id = %user.uid,
            total = order.total_cents,
            "Order placed"
        );
        Ok(order)
    }

    /// A user's order history, newest first.
    pub async fn order_history(&self, auth: &AuthState) -> Result<Vec<Order>, ApiError> {
        let user = auth.require_user()?;
        let orders = self.orders.get_by_user_id(&user.uid).await?;
        Ok(orders)
    }
}
