//! # Checkout Module
//!
//! The checkout core: exact total computation and the linear three-step
//! wizard state machine.
//!
//! ## Wizard Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Wizard                                     │
//! │                                                                         │
//! │   Shipping ──advance──► Payment ──advance──► Review ──submit──► Order   │
//! │      ▲                    │  ▲                 │                        │
//! │      └───────back─────────┘  └───────back──────┘                        │
//! │                                                                         │
//! │  • advance() is gated by explicit validation of the current step        │
//! │  • back() never loses already-entered data                              │
//! │  • Submission requires an authenticated user (app layer)                │
//! │  • On persistence failure the wizard stays on Review (manual retry)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Total Computation (exact, integer cents)
//! ```text
//! subtotal = Σ unit_price × quantity
//! shipping = R0 if subtotal > R1500, else R150
//! tax      = 15% VAT on subtotal, half-up to the cent
//! total    = subtotal + shipping + tax
//! ```

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PaymentMethod, ShippingAddress};
use crate::validation::{validate_payment_selection, validate_shipping_address};
use crate::{FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS, VAT_RATE_BPS};

// =============================================================================
// Totals
// =============================================================================

/// The checkout totals breakdown.
///
/// Invariant: `total_cents == subtotal_cents + shipping_cents + tax_cents`,
/// guaranteed by construction in [`CheckoutTotals::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl CheckoutTotals {
    /// Computes the totals breakdown for a subtotal.
    ///
    /// Pure function, no side effects. Boundary: a subtotal of exactly
    /// R1500.00 still pays the flat R150.00 shipping fee.
    ///
    /// ## Example
    /// ```rust
    /// use veld_core::checkout::CheckoutTotals;
    /// use veld_core::money::Money;
    ///
    /// // cart = [{R100 × 2}, {R500 × 1}] → subtotal R700
    /// let totals = CheckoutTotals::compute(Money::from_cents(70_000));
    /// assert_eq!(totals.shipping_cents, 15_000); // R700 ≤ R1500
    /// assert_eq!(totals.tax_cents, 10_500);      // 15% VAT
    /// assert_eq!(totals.total_cents, 95_500);    // R955.00
    /// ```
    pub fn compute(subtotal: Money) -> Self {
        let shipping = if subtotal.cents() > FREE_SHIPPING_THRESHOLD_CENTS {
            Money::zero()
        } else {
            Money::from_cents(FLAT_SHIPPING_CENTS)
        };
        let tax = subtotal.apply_rate(VAT_RATE_BPS);
        let total = subtotal + shipping + tax;

        CheckoutTotals {
            subtotal_cents: subtotal.cents(),
            shipping_cents: shipping.cents(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
        }
    }

    /// Computes totals for a set of cart items.
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal = items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total());
        Self::compute(subtotal)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Payment Selection
// =============================================================================

/// The payment details captured on the payment step.
///
/// ## Never Persisted
/// Card number, expiry, and CVV live only inside the wizard. Only the
/// [`PaymentMethod`] discriminant is written to the order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentSelection {
    /// Credit/debit card with card details.
    Credit {
        card_number: String,
        /// Expiry in MM/YY form.
        expiry: String,
        cvv: String,
    },
    /// Ozow instant EFT (redirect flow, no fields captured here).
    Ozow,
    /// Manual EFT with the customer's payment reference.
    Eft { reference: String },
}

impl PaymentSelection {
    /// The persistable payment method discriminant.
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentSelection::Credit { .. } => PaymentMethod::Credit,
            PaymentSelection::Ozow => PaymentMethod::Ozow,
            PaymentSelection::Eft { .. } => PaymentMethod::Eft,
        }
    }
}

// =============================================================================
// Wizard
// =============================================================================

/// The three checkout steps, in order. Linear, no branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Review,
}

/// The checkout wizard state machine.
///
/// Step advance is an explicit, validated precondition: the wizard refuses
/// to move forward past incomplete or malformed input. Going back never
/// discards entered data; returning to a step redisplays what was captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutWizard {
    step: CheckoutStep,
    shipping: ShippingAddress,
    payment: Option<PaymentSelection>,
}

impl CheckoutWizard {
    /// Starts a new checkout on the shipping step.
    pub fn new() -> Self {
        CheckoutWizard {
            step: CheckoutStep::Shipping,
            shipping: ShippingAddress::default(),
            payment: None,
        }
    }

    /// The current step.
    #[inline]
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The shipping address as entered so far.
    pub fn shipping(&self) -> &ShippingAddress {
        &self.shipping
    }

    /// Stores the shipping form.
    ///
    /// Capture is unvalidated on purpose; validation gates [`advance`],
    /// not data entry, so a user can save a half-finished form and return.
    ///
    /// [`advance`]: CheckoutWizard::advance
    pub fn set_shipping(&mut self, address: ShippingAddress) {
        self.shipping = address;
    }

    /// The payment selection as entered so far.
    pub fn payment(&self) -> Option<&PaymentSelection> {
        self.payment.as_ref()
    }

    /// Stores the payment selection.
    pub fn set_payment(&mut self, selection: PaymentSelection) {
        self.payment = Some(selection);
    }

    /// Advances to the next step after validating the current one.
    ///
    /// ## Gating
    /// - `Shipping → Payment`: requires a complete, well-formed address
    /// - `Payment → Review`: requires a captured, well-formed payment
    ///   selection
    /// - `Review`: cannot advance; submission is a separate operation
    ///   owned by the app layer
    pub fn advance(&mut self) -> CoreResult<CheckoutStep> {
        match self.step {
            CheckoutStep::Shipping => {
                validate_shipping_address(&self.shipping)?;
                self.step = CheckoutStep::Payment;
            }
            CheckoutStep::Payment => {
                let selection = self
                    .payment
                    .as_ref()
                    .ok_or(CoreError::PaymentMethodMissing)?;
                validate_payment_selection(selection)?;
                self.step = CheckoutStep::Review;
            }
            CheckoutStep::Review => {
                return Err(CoreError::WrongCheckoutStep {
                    current: CheckoutStep::Review,
                    operation: "advance",
                });
            }
        }
        Ok(self.step)
    }

    /// Steps back, preserving all entered data. No-op on the first step.
    pub fn back(&mut self) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Shipping => CheckoutStep::Shipping,
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
        };
        self.step
    }

    /// Confirms the wizard is ready for submission.
    ///
    /// Returns the validated shipping address and payment method. Errors if
    /// the wizard has not reached the review step.
    pub fn ready_for_submission(&self) -> CoreResult<(&ShippingAddress, PaymentMethod)> {
        if self.step != CheckoutStep::Review {
            return Err(CoreError::WrongCheckoutStep {
                current: self.step,
                operation: "place the order",
            });
        }
        // Both were validated on the way in; the payment selection must
        // exist for the wizard to have reached Review.
        let selection = self
            .payment
            .as_ref()
            .ok_or(CoreError::PaymentMethodMissing)?;
        Ok((&self.shipping, selection.method()))
    }
}

impl Default for CheckoutWizard {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Thandi".to_string(),
            last_name: "Nkosi".to_string(),
            email: "thandi@example.co.za".to_string(),
            address: "12 Long Street".to_string(),
            city: "Cape Town".to_string(),
            province: "Western Cape".to_string(),
            postal_code: "8001".to_string(),
            country: "South Africa".to_string(),
        }
    }

    fn cart_item(product_id: &str, price_cents: i64, quantity: i64) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            name: format!("Product {}", product_id),
            unit_price_cents: price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Totals
    // -------------------------------------------------------------------------

    #[test]
    fn test_totals_below_free_shipping_threshold() {
        // cart = [{R100 × 2}, {R500 × 1}] → subtotal R700, shipping R150,
        // tax R105, total R955.00
        let items = vec![cart_item("1", 10_000, 2), cart_item("2", 50_000, 1)];
        let totals = CheckoutTotals::for_items(&items);

        assert_eq!(totals.subtotal_cents, 70_000);
        assert_eq!(totals.shipping_cents, 15_000);
        assert_eq!(totals.tax_cents, 10_500);
        assert_eq!(totals.total_cents, 95_500);
        assert_eq!(totals.total().to_string(), "R955.00");
    }

    #[test]
    fn test_totals_above_free_shipping_threshold() {
        // cart = [{R2000 × 1}] → subtotal R2000, shipping 0, tax R300,
        // total R2300.00
        let items = vec![cart_item("1", 200_000, 1)];
        let totals = CheckoutTotals::for_items(&items);

        assert_eq!(totals.subtotal_cents, 200_000);
        assert_eq!(totals.shipping_cents, 0);
        assert_eq!(totals.tax_cents, 30_000);
        assert_eq!(totals.total_cents, 230_000);
        assert_eq!(totals.total().to_string(), "R2300.00");
    }

    #[test]
    fn test_totals_boundary_exactly_at_threshold() {
        // subtotal == R1500 still pays shipping
        let totals = CheckoutTotals::compute(Money::from_cents(150_000));
        assert_eq!(totals.shipping_cents, 15_000);

        // one cent over is free
        let totals = CheckoutTotals::compute(Money::from_cents(150_001));
        assert_eq!(totals.shipping_cents, 0);
    }

    #[test]
    fn test_totals_invariant_holds() {
        for subtotal in [0, 1, 99, 14_999, 150_000, 150_001, 1_000_000] {
            let t = CheckoutTotals::compute(Money::from_cents(subtotal));
            assert_eq!(t.total_cents, t.subtotal_cents + t.shipping_cents + t.tax_cents);
        }
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = CheckoutTotals::for_items(&[]);
        assert_eq!(totals.subtotal_cents, 0);
        // Zero subtotal is not above the threshold, so the flat fee applies;
        // the app layer refuses to start checkout on an empty cart anyway.
        assert_eq!(totals.shipping_cents, 15_000);
    }

    // -------------------------------------------------------------------------
    // Wizard
    // -------------------------------------------------------------------------

    #[test]
    fn test_wizard_happy_path() {
        let mut wizard = CheckoutWizard::new();
        assert_eq!(wizard.step(), CheckoutStep::Shipping);

        wizard.set_shipping(valid_address());
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Payment);

        wizard.set_payment(PaymentSelection::Ozow);
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Review);

        let (address, method) = wizard.ready_for_submission().unwrap();
        assert_eq!(address.city, "Cape Town");
        assert_eq!(method, PaymentMethod::Ozow);
    }

    #[test]
    fn test_wizard_blocks_incomplete_shipping() {
        let mut wizard = CheckoutWizard::new();
        let mut address = valid_address();
        address.city = "".to_string();
        wizard.set_shipping(address);

        let err = wizard.advance().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_wizard_blocks_missing_payment() {
        let mut wizard = CheckoutWizard::new();
        wizard.set_shipping(valid_address());
        wizard.advance().unwrap();

        let err = wizard.advance().unwrap_err();
        assert!(matches!(err, CoreError::PaymentMethodMissing));
        assert_eq!(wizard.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_wizard_blocks_bad_card() {
        let mut wizard = CheckoutWizard::new();
        wizard.set_shipping(valid_address());
        wizard.advance().unwrap();

        wizard.set_payment(PaymentSelection::Credit {
            card_number: "not-a-card".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        });
        let err = wizard.advance().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_wizard_back_preserves_data() {
        let mut wizard = CheckoutWizard::new();
        wizard.set_shipping(valid_address());
        wizard.advance().unwrap();
        wizard.set_payment(PaymentSelection::Eft {
            reference: "INV-001".to_string(),
        });
        wizard.advance().unwrap();

        // Back to Payment, then Shipping: everything entered is still there
        assert_eq!(wizard.back(), CheckoutStep::Payment);
        assert_eq!(wizard.back(), CheckoutStep::Shipping);
        assert_eq!(wizard.back(), CheckoutStep::Shipping); // no-op at first step

        assert_eq!(wizard.shipping().first_name, "Thandi");
        assert!(matches!(
            wizard.payment(),
            Some(PaymentSelection::Eft { .. })
        ));

        // Forward again without re-entering anything
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Payment);
        assert_eq!(wizard.advance().unwrap(), CheckoutStep::Review);
    }

    #[test]
    fn test_wizard_cannot_advance_past_review() {
        let mut wizard = CheckoutWizard::new();
        wizard.set_shipping(valid_address());
        wizard.advance().unwrap();
        wizard.set_payment(PaymentSelection::Ozow);
        wizard.advance().unwrap();

        let err = wizard.advance().unwrap_err();
        assert!(matches!(err, CoreError::WrongCheckoutStep { .. }));
    }

    #[test]
    fn test_submission_requires_review_step() {
        let wizard = CheckoutWizard::new();
        let err = wizard.ready_for_submission().unwrap_err();
        assert!(matches!(
            err,
            CoreError::WrongCheckoutStep {
                current: CheckoutStep::Shipping,
                ..
            }
        ));
    }

    #[test]
    fn test_payment_selection_method_only() {
        let selection = PaymentSelection::Credit {
            card_number: "4111111111111111".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        };
        // Only the discriminant crosses into the order record
        assert_eq!(selection.method(), PaymentMethod::Credit);
    }
}
