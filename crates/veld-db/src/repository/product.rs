//! # Product Repository
//!
//! Catalog CRUD, browsing queries and the SKU upsert used by bulk import.
//!
//! ## Soft Delete
//! Products referenced by historical order lines must never disappear, so
//! deletion flips `is_active` instead of removing the row. Browse queries
//! only return active products; admin lookups by id/SKU see everything.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use veld_core::validation::{validate_name, validate_price_cents, validate_sku};
use veld_core::Product;

// =============================================================================
// Inputs
// =============================================================================

/// Input for creating a product (no id/timestamps).
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub stock: i64,
}

/// Partial update for a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub image_url: Option<Option<String>>,
    pub stock: Option<i64>,
    pub is_active: Option<bool>,
}

const SELECT_PRODUCT: &str = "\
    SELECT id, sku, name, description, category, price_cents, image_url, \
           stock, is_active, created_at, updated_at \
    FROM products";

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Creates a product. Fails with [`DbError::InvalidInput`] on a bad
    /// SKU, name or price, and [`DbError::UniqueViolation`] on a
    /// duplicate SKU.
    pub async fn create(&self, new_product: NewProduct) -> DbResult<Product> {
        validate_sku(&new_product.sku)?;
        validate_name(&new_product.name)?;
        validate_price_cents(new_product.price_cents)?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!(sku = %new_product.sku, "Creating product");

        sqlx::query(
            "INSERT INTO products ( \
                id, sku, name, description, category, price_cents, image_url, \
                stock, is_active, created_at, updated_at \
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9, ?10)",
        )
        .bind(&id)
        .bind(&new_product.sku)
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(&new_product.category)
        .bind(new_product.price_cents)
        .bind(&new_product.image_url)
        .bind(new_product.stock)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id,
            sku: new_product.sku,
            name: new_product.name,
            description: new_product.description,
            category: new_product.category,
            price_cents: new_product.price_cents,
            image_url: new_product.image_url,
            stock: new_product.stock,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets a product by ID (active or not).
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as(&format!("{SELECT_PRODUCT} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Gets a product by SKU (active or not).
    pub async fn get_by_sku(&self, sku: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as(&format!("{SELECT_PRODUCT} WHERE sku = ?1"))
            .bind(sku)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Lists active products, newest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as(&format!(
            "{SELECT_PRODUCT} WHERE is_active = 1 ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Lists active products in a category, newest first.
    pub async fn list_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as(&format!(
            "{SELECT_PRODUCT} WHERE is_active = 1 AND category = ?1 ORDER BY created_at DESC"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Searches active products by name or description (case-insensitive
    /// substring).
    pub async fn search(&self, query: &str) -> DbResult<Vec<Product>> {
        let pattern = format!("%{}%", query.trim());

        let products = sqlx::query_as(&format!(
            "{SELECT_PRODUCT} WHERE is_active = 1 \
             AND (name LIKE ?1 OR description LIKE ?1) \
             ORDER BY name"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Applies a partial update and returns the updated product.
    ///
    /// Provided fields are validated the same way as on create.
    pub async fn update(&self, id: &str, update: ProductUpdate) -> DbResult<Product> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(price_cents) = update.price_cents {
            validate_price_cents(price_cents)?;
        }

        let mut current = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))?;

        if let Some(name) = update.name {
            current.name = name;
        }
        if let Some(description) = update.description {
            current.description = description;
        }
        if let Some(category) = update.category {
            current.category = category;
        }
        if let Some(price_cents) = update.price_cents {
            current.price_cents = price_cents;
        }
        if let Some(image_url) = update.image_url {
            current.image_url = image_url;
        }
        if let Some(stock) = update.stock {
            current.stock = stock;
        }
        if let Some(is_active) = update.is_active {
            current.is_active = is_active;
        }
        current.updated_at = Utc::now();

        sqlx::query(
            "UPDATE products SET \
                name = ?2, description = ?3, category = ?4, price_cents = ?5, \
                image_url = ?6, stock = ?7, is_active = ?8, updated_at = ?9 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&current.name)
        .bind(&current.description)
        .bind(&current.category)
        .bind(current.price_cents)
        .bind(&current.image_url)
        .bind(current.stock)
        .bind(current.is_active)
        .bind(current.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(current)
    }

    /// Soft-deletes a product by marking it inactive.
    ///
    /// The row stays: order history still references it by id.
    pub async fn deactivate(&self, id: &str) -> DbResult<()> {
        let now = Utc::now();

        let result =
            sqlx::query("UPDATE products SET is_active = 0, updated_at = ?2 WHERE id = ?1")
                .bind(id)
                .bind(now)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Inserts or updates a product keyed by SKU (bulk import path).
    ///
    /// ## Returns
    /// `true` if a new row was inserted, `false` if an existing SKU was
    /// updated.
    pub async fn upsert_by_sku(&self, new_product: NewProduct) -> DbResult<bool> {
        match self.get_by_sku(&new_product.sku).await? {
            Some(existing) => {
                self.update(
                    &existing.id,
                    ProductUpdate {
                        name: Some(new_product.name),
                        description: Some(new_product.description),
                        category: Some(new_product.category),
                        price_cents: Some(new_product.price_cents),
                        image_url: Some(new_product.image_url),
                        stock: Some(new_product.stock),
                        is_active: Some(true),
                    },
                )
                .await?;
                Ok(false)
            }
            None => {
                self.create(new_product).await?;
                Ok(true)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
