//! Display formatting helpers for currency and dates.
//!
//! The storefront renders every amount with fixed two-decimal precision and
//! order dates in a short human-readable form.

use chrono::{DateTime, Utc};

use crate::money::Money;

/// Formats money as `R955.00`. Thin wrapper over [`Money`]'s `Display`.
pub fn format_price(money: Money) -> String {
    money.to_string()
}

/// Formats an amount given in cents.
pub fn format_price_cents(cents: i64) -> String {
    Money::from_cents(cents).to_string()
}

/// Formats an order timestamp as `14 Mar 2026`.
pub fn format_order_date(at: DateTime<Utc>) -> String {
    at.format("%-d %b %Y").to_string()
}

/// Formats a full timestamp as `14 Mar 2026, 09:30`.
pub fn format_order_datetime(at: DateTime<Utc>) -> String {
    at.format("%-d %b %Y, %H:%M").to_string()
}
