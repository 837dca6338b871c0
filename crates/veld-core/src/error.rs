//! # Error Types
//!
//! Domain-specific error types for veld-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  veld-core errors (this file)                                           │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  veld-db errors (separate crate)                                        │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  Storefront app errors                                                  │
//! │  └── ApiError         - What the UI layer sees                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → UI            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, step, field)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::checkout::CheckoutStep;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are caught by the app layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted without a signed-in user.
    ///
    /// Order submission requires an authenticated session; this is surfaced
    /// inline on the review step and blocks progression.
    #[error("You must be signed in to place an order")]
    NotSignedIn,

    /// Checkout cannot begin or complete on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A wizard operation was attempted from the wrong step.
    ///
    /// ## When This Occurs
    /// - Submitting an order while still on Shipping or Payment
    /// - Advancing past Review (submission is a separate operation)
    #[error("Checkout is on the {current:?} step, cannot {operation}")]
    WrongCheckoutStep {
        current: CheckoutStep,
        operation: &'static str,
    },

    /// Advancing to the payment step requires a captured payment selection.
    #[error("No payment method selected")]
    PaymentMethodMissing,

    /// Product not in the cart.
    #[error("Product not in cart: {0}")]
    NotInCart(String),

    /// Cart has exceeded maximum allowed line items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Persisted totals do not satisfy the checkout invariant.
    ///
    /// `total == subtotal + shipping + tax` must hold at order-creation
    /// time. A mismatch means a caller computed totals outside the core.
    #[error("Order total {declared} does not match computed total {computed}")]
    TotalMismatch { declared: i64, computed: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad email, bad card number, bad decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
