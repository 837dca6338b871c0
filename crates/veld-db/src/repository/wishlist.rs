//! # Wishlist Repository
//!
//! Per-user saved products.
//!
//! `add` is idempotent by design: the app applies wishlist toggles
//! optimistically and then persists, so a retry after a flaky write must
//! not fail or duplicate. The `(user_id, product_id)` primary key plus
//! `INSERT OR IGNORE` makes the second add a no-op.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use veld_core::WishlistEntry;

/// Repository for wishlist database operations.
#[derive(Debug, Clone)]
pub struct WishlistRepository {
    pool: SqlitePool,
}

impl WishlistRepository {
    /// Creates a new WishlistRepository.
    pub fn new(pool: SqlitePool) -> Self {
        WishlistRepository { pool }
    }

    /// Adds a product to a user's wishlist.
    ///
    /// ## Returns
    /// `true` if the entry was added, `false` if it was already present
    /// (the stored snapshot is kept, not overwritten).
    pub async fn add(&self, user_id: &str, entry: &WishlistEntry) -> DbResult<bool> {
        if user_id.trim().is_empty() {
            return Err(DbError::MissingUserId);
        }

        let result = sqlx::query(
            "INSERT OR IGNORE INTO wishlist_items \
             (user_id, product_id, name, price_cents, added_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(user_id)
        .bind(&entry.product_id)
        .bind(&entry.name)
        .bind(entry.price_cents)
        .bind(entry.added_at)
        .execute(&self.pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        debug!(user_id, product_id = %entry.product_id, inserted, "Wishlist add");
        Ok(inserted)
    }

    /// Removes a product from a user's wishlist.
    ///
    /// ## Returns
    /// `true` if an entry was removed, `false` if it wasn't there.
    pub async fn remove(&self, user_id: &str, product_id: &str) -> DbResult<bool> {
        if user_id.trim().is_empty() {
            return Err(DbError::MissingUserId);
        }

        let result =
            sqlx::query("DELETE FROM wishlist_items WHERE user_id = ?1 AND product_id = ?2")
                .bind(user_id)
                .bind(product_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks whether a product is on a user's wishlist.
    pub async fn contains(&self, user_id: &str, product_id: &str) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM wishlist_items WHERE user_id = ?1 AND product_id = ?2",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Lists a user's wishlist, most recently added first.
    pub async fn list_for_user(&self, user_id: &str) -> DbResult<Vec<WishlistEntry>> {
        if user_id.trim().is_empty() {
            return Err(DbError::MissingUserId);
        }

        let entries = sqlx::query_as(
            "SELECT product_id, name, price_cents, added_at \
             FROM wishlist_items WHERE user_id = ?1 ORDER BY added_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Removes all wishlist entries for a user.
    pub async fn clear_for_user(&self, user_id: &str) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE user_id = ?1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
