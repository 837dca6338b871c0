//! # Validation Module
//!
//! Input validation utilities for Veld Storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form capture                                                  │
//! │  └── Unvalidated on purpose (save half-finished forms)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE — explicit step/operation preconditions           │
//! │  ├── Wizard advance gating (address, payment selection)                 │
//! │  └── Catalog/admin input (names, prices, quantities)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  ├── NOT NULL / UNIQUE constraints                                      │
//! │  └── Foreign key constraints                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::checkout::PaymentSelection;
use crate::error::ValidationError;
use crate::types::ShippingAddress;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Shipping Address
// =============================================================================

/// Validates a shipping address for submission.
///
/// ## Rules
/// - Every field is required non-empty (after trimming)
/// - Email must look like an address (one `@` with text either side)
/// - Postal code must be digits (South African postal codes are 4 digits,
///   but length is left to the carrier integration)
pub fn validate_shipping_address(address: &ShippingAddress) -> ValidationResult<()> {
    let required = [
        ("firstName", &address.first_name),
        ("lastName", &address.last_name),
        ("email", &address.email),
        ("address", &address.address),
        ("city", &address.city),
        ("province", &address.province),
        ("postalCode", &address.postal_code),
        ("country", &address.country),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }
    }

    validate_email(&address.email)?;

    if !address.postal_code.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "postalCode".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address shape.
///
/// Not RFC 5322; the hosted auth backend is the authority. This catches
/// obvious typos before an order is placed against a bad address.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Payment Selection
// =============================================================================

/// Validates a payment selection for the payment → review transition.
///
/// ## Rules
/// - Credit: card number 13-19 digits (spaces tolerated), expiry `MM/YY`,
///   CVV 3-4 digits
/// - Ozow: nothing to validate (redirect flow)
/// - EFT: non-empty payment reference
pub fn validate_payment_selection(selection: &PaymentSelection) -> ValidationResult<()> {
    match selection {
        PaymentSelection::Credit {
            card_number,
            expiry,
            cvv,
        } => {
            validate_card_number(card_number)?;
            validate_card_expiry(expiry)?;
            validate_cvv(cvv)?;
            Ok(())
        }
        PaymentSelection::Ozow => Ok(()),
        PaymentSelection::Eft { reference } => {
            if reference.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "reference".to_string(),
                });
            }
            Ok(())
        }
    }
}

/// Validates a card number: 13-19 digits, spaces tolerated.
///
/// No Luhn check: the acquirer rejects bad PANs, and the number never
/// leaves the wizard anyway.
pub fn validate_card_number(card_number: &str) -> ValidationResult<()> {
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: "cardNumber".to_string(),
        });
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) || !(13..=19).contains(&digits.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "cardNumber".to_string(),
            reason: "must be 13-19 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a card expiry in `MM/YY` form with a real month.
pub fn validate_card_expiry(expiry: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidFormat {
        field: "expiry".to_string(),
        reason: "must be MM/YY".to_string(),
    };

    let (month, year) = expiry.trim().split_once('/').ok_or_else(invalid)?;

    if month.len() != 2 || year.len() != 2 {
        return Err(invalid());
    }

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let _: u32 = year.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a CVV: 3 or 4 digits.
pub fn validate_cvv(cvv: &str) -> ValidationResult<()> {
    let cvv = cvv.trim();

    if !cvv.chars().all(|c| c.is_ascii_digit()) || !(3..=4).contains(&cvv.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "cvv".to_string(),
            reason: "must be 3 or 4 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog / Admin Input
// =============================================================================

/// Validates a product or FAQ display name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a SKU.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents: non-negative, zero allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
