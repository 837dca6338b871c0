//! # Wishlist State
//!
//! Local mirror of the signed-in user's persisted wishlist.
//!
//! ## Two-Phase Updates
//! Toggles apply to the local mirror first so the UI responds immediately,
//! then persist to the database. If the write fails, the local change is
//! rolled back and the error surfaces to the caller:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Wishlist Toggle Flow                                 │
//! │                                                                         │
//! │  toggle(product)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Apply to local mirror (add or remove) ── UI updates now             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Persist via WishlistRepository                                      │
//! │       │                                                                 │
//! │       ├── Ok ────► done                                                 │
//! │       │                                                                 │
//! │       └── Err ───► revert local change, return the error                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is never held across an await: each phase takes and releases
//! it independently.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::warn;
use veld_core::{Product, Wishlist, WishlistEntry};
use veld_db::WishlistRepository;

use crate::error::ApiError;

/// Managed wishlist state.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    /// Creates an empty wishlist state.
    pub fn new() -> Self {
        WishlistState {
            wishlist: Arc::new(Mutex::new(Wishlist::new())),
        }
    }

    /// Replaces the local mirror with the user's persisted wishlist.
    ///
    /// Called after sign-in.
    pub async fn load_for_user(
        &self,
        repo: &WishlistRepository,
        user_id: &str,
    ) -> Result<(), ApiError> {
        let entries = repo.list_for_user(user_id).await?;

        let mut guard = self.wishlist.lock().expect("Wishlist mutex poisoned");
        *guard = Wishlist::from_entries(entries);
        Ok(())
    }

    /// Clears the local mirror (sign-out). Persisted rows are untouched.
    pub fn clear_local(&self) {
        self.wishlist
            .lock()
            .expect("Wishlist mutex poisoned")
            .clear();
    }

    /// Toggles a product on the wishlist.
    ///
    /// ## Returns
    /// `true` if the product is saved after the toggle, `false` if it was
    /// removed.
    ///
    /// ## Failure
    /// On a persistence failure the local change is reverted and the error
    /// returned; local and remote state stay in agreement.
    pub async fn toggle(
        &self,
        repo: &WishlistRepository,
        user_id: &str,
        product: &Product,
    ) -> Result<bool, ApiError> {
        let entry = WishlistEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price_cents: product.price_cents,
            added_at: Utc::now(),
        };

        // Phase 1: local
        let adding = {
            let mut guard = self.wishlist.lock().expect("Wishlist mutex poisoned");
            if guard.contains(&product.id) {
                guard.remove(&product.id);
                false
            } else {
                guard.add(entry.clone());
                true
            }
        };

        // Phase 2: remote, with rollback on failure
        let result = if adding {
            repo.add(user_id, &entry).await.map(|_| ())
        } else {
            repo.remove(user_id, &product.id).await.map(|_| ())
        };

        if let Err(e) = result {
            warn!(product_id = %product.id, error = %e, "Wishlist persist failed, reverting");
            let mut guard = self.wishlist.lock().expect("Wishlist mutex poisoned");
            if adding {
                guard.remove(&product.id);
            } else {
                guard.add(entry);
            }
            return Err(e.into());
        }

        Ok(adding)
    }

    /// Membership test against the local mirror.
    pub fn contains(&self, product_id: &str) -> bool {
        self.wishlist
            .lock()
            .expect("Wishlist mutex poisoned")
            .contains(product_id)
    }

    /// Snapshot of the saved entries.
    pub fn entries(&self) -> Vec<WishlistEntry> {
        self.wishlist
            .lock()
            .expect("Wishlist mutex poisoned")
            .entries()
            .to_vec()
    }
}
