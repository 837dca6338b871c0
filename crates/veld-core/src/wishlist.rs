//! # Wishlist Module
//!
//! Pure wishlist semantics: a set of saved products keyed by product ID.
//!
//! Unlike the cart, adding an already-saved product is an idempotent no-op
//! rather than a quantity increment, and the wishlist is persisted remotely
//! per authenticated user (the app layer owns the persistence; this module
//! owns the set semantics).

use serde::{Deserialize, Serialize};

use crate::types::WishlistEntry;

/// A user's wishlist.
///
/// ## Invariants
/// - Entries are unique by `product_id`
/// - Double-add yields one stored entry, not two
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist {
            entries: Vec::new(),
        }
    }

    /// Builds a wishlist from already-persisted entries, dropping duplicates.
    pub fn from_entries(entries: Vec<WishlistEntry>) -> Self {
        let mut wishlist = Wishlist::new();
        for entry in entries {
            wishlist.add(entry);
        }
        wishlist
    }

    /// Adds an entry; no-op if the product is already saved.
    ///
    /// Returns `true` if the entry was inserted, `false` if it was already
    /// present.
    pub fn add(&mut self, entry: WishlistEntry) -> bool {
        if self.contains(&entry.product_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes an entry by product ID. Returns `true` if one was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);
        self.entries.len() != initial_len
    }

    /// Membership test by product ID.
    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Saved entries in insertion order.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }
}
