//! # Order Repository
//!
//! Database operations for orders and their line items.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE (checkout completion, the only client-side write)            │
//! │     └── create_order() → Order { status: Processing,                    │
//! │                                  payment_status: Pending,               │
//! │                                  created_at == updated_at }             │
//! │        • totals are re-verified against the checkout invariant          │
//! │        • order + line items inserted in one transaction                 │
//! │                                                                         │
//! │  2. READ (profile page)                                                 │
//! │     └── get_by_user_id() → newest first, explicit error on empty id     │
//! │                                                                         │
//! │  3. MUTATE (backend/admin only, never the storefront client)            │
//! │     └── update_status() / update_payment_status()                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use veld_core::checkout::CheckoutTotals;
use veld_core::{
    Money, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus, ShippingAddress,
};

// =============================================================================
// Inputs
// =============================================================================

/// A line item for a new order, frozen from the cart at submission time.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

/// Input for creating an order: everything except the server-generated
/// id and timestamps.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: String,
    pub items: Vec<NewOrderItem>,
    pub totals: CheckoutTotals,
    pub payment_method: PaymentMethod,
    pub shipping_address: ShippingAddress,
}

// =============================================================================
// Row Types
// =============================================================================

/// Raw order row; `items` are assembled separately.
#[derive(Debug, FromRow)]
struct OrderRow {
    id: String,
    user_id: String,
    subtotal_cents: i64,
    shipping_cents: i64,
    tax_cents: i64,
    total_cents: i64,
    status: OrderStatus,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
    ship_first_name: String,
    ship_last_name: String,
    ship_email: String,
    ship_address: String,
    ship_city: String,
    ship_province: String,
    ship_postal_code: String,
    ship_country: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: self.id,
            user_id: self.user_id,
            items,
            subtotal_cents: self.subtotal_cents,
            shipping_cents: self.shipping_cents,
            tax_cents: self.tax_cents,
            total_cents: self.total_cents,
            status: self.status,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            shipping_address: ShippingAddress {
                first_name: self.ship_first_name,
                last_name: self.ship_last_name,
                email: self.ship_email,
                address: self.ship_address,
                city: self.ship_city,
                province: self.ship_province,
                postal_code: self.ship_postal_code,
                country: self.ship_country,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const SELECT_ORDER: &str = "\
    SELECT id, user_id, subtotal_cents, shipping_cents, tax_cents, total_cents, \
           status, payment_method, payment_status, \
           ship_first_name, ship_last_name, ship_email, ship_address, \
           ship_city, ship_province, ship_postal_code, ship_country, \
           created_at, updated_at \
    FROM orders";

// =============================================================================
// Repository
// =============================================================================

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Creates an order from checkout output.
    ///
    /// ## What This Does
    /// 1. Re-verifies the totals invariant (`total == subtotal + shipping
    ///    + tax`, recomputed from the line items) and rejects mismatches
    /// 2. Generates the order id and server-side timestamps
    ///    (`created_at == updated_at` on first write)
    /// 3. Inserts the order and its line items in one transaction
    ///
    /// ## Returns
    /// The persisted order, including the generated id.
    pub async fn create_order(&self, new_order: NewOrder) -> DbResult<Order> {
        if new_order.user_id.trim().is_empty() {
            return Err(DbError::MissingUserId);
        }

        // The invariant is enforced here, at the last write boundary,
        // rather than trusted from the caller.
        let subtotal = new_order
            .items
            .iter()
            .fold(Money::zero(), |acc, i| {
                acc + Money::from_cents(i.unit_price_cents).multiply_quantity(i.quantity)
            });
        let computed = CheckoutTotals::compute(subtotal);
        if computed != new_order.totals {
            return Err(DbError::InvalidTotals {
                declared: new_order.totals.total_cents,
                computed: computed.total_cents,
            });
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!(id = %id, user_id = %new_order.user_id, total = new_order.totals.total_cents, "Creating order");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        sqlx::query(
            "INSERT INTO orders ( \
                id, user_id, subtotal_cents, shipping_cents, tax_cents, total_cents, \
                status, payment_method, payment_status, \
                ship_first_name, ship_last_name, ship_email, ship_address, \
                ship_city, ship_province, ship_postal_code, ship_country, \
                created_at, updated_at \
            ) VALUES ( \
                ?1, ?2, ?3, ?4, ?5, ?6, \
                ?7, ?8, ?9, \
                ?10, ?11, ?12, ?13, \
                ?14, ?15, ?16, ?17, \
                ?18, ?19 \
            )",
        )
        .bind(&id)
        .bind(&new_order.user_id)
        .bind(new_order.totals.subtotal_cents)
        .bind(new_order.totals.shipping_cents)
        .bind(new_order.totals.tax_cents)
        .bind(new_order.totals.total_cents)
        .bind(OrderStatus::Processing)
        .bind(new_order.payment_method)
        .bind(PaymentStatus::Pending)
        .bind(&new_order.shipping_address.first_name)
        .bind(&new_order.shipping_address.last_name)
        .bind(&new_order.shipping_address.email)
        .bind(&new_order.shipping_address.address)
        .bind(&new_order.shipping_address.city)
        .bind(&new_order.shipping_address.province)
        .bind(&new_order.shipping_address.postal_code)
        .bind(&new_order.shipping_address.country)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let mut items = Vec::with_capacity(new_order.items.len());
        for (position, item) in new_order.items.iter().enumerate() {
            let item_id = Uuid::new_v4().to_string();

            sqlx::query(
                "INSERT INTO order_items ( \
                    id, order_id, product_id, name, unit_price_cents, quantity, position \
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .bind(&item_id)
            .bind(&id)
            .bind(&item.product_id)
            .bind(&item.name)
            .bind(item.unit_price_cents)
            .bind(item.quantity)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;

            items.push(OrderItem {
                id: item_id,
                order_id: id.clone(),
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                unit_price_cents: item.unit_price_cents,
                quantity: item.quantity,
                position: position as i64,
            });
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(Order {
            id,
            user_id: new_order.user_id,
            items,
            subtotal_cents: new_order.totals.subtotal_cents,
            shipping_cents: new_order.totals.shipping_cents,
            tax_cents: new_order.totals.tax_cents,
            total_cents: new_order.totals.total_cents,
            status: OrderStatus::Processing,
            payment_method: new_order.payment_method,
            payment_status: PaymentStatus::Pending,
            shipping_address: new_order.shipping_address,
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets an order by ID, with its line items.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let row: Option<OrderRow> =
            sqlx::query_as(&format!("{SELECT_ORDER} WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => {
                let items = self.get_items(&row.id).await?;
                Ok(Some(row.into_order(items)))
            }
            None => Ok(None),
        }
    }

    /// Gets a user's order history, newest first.
    ///
    /// ## Guard
    /// An empty or whitespace `user_id` fails with an explicit error
    /// rather than returning an empty list: callers passing a blank id
    /// have a bug upstream, not an empty history.
    pub async fn get_by_user_id(&self, user_id: &str) -> DbResult<Vec<Order>> {
        if user_id.trim().is_empty() {
            return Err(DbError::MissingUserId);
        }

        let rows: Vec<OrderRow> = sqlx::query_as(&format!(
            "{SELECT_ORDER} WHERE user_id = ?1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = self.get_items(&row.id).await?;
            orders.push(row.into_order(items));
        }

        Ok(orders)
    }

    /// Gets all line items for an order, in display position order.
    async fn get_items(&self, order_id: &str) -> DbResult<Vec<OrderItem>> {
        let items: Vec<OrderItem> = sqlx::query_as(
            "SELECT id, order_id, product_id, name, unit_price_cents, quantity, position \
             FROM order_items WHERE order_id = ?1 ORDER BY position",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Updates the fulfilment status (backend/admin operation).
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> DbResult<()> {
        let now = Utc::now();

        let result = sqlx::query("UPDATE orders SET status = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .bind(now)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Updates the payment status (backend/admin operation).
    pub async fn update_payment_status(&self, id: &str, status: PaymentStatus) -> DbResult<()> {
        let now = Utc::now();

        let result =
            sqlx::query("UPDATE orders SET payment_status = ?2, updated_at = ?3 WHERE id = ?1")
                .bind(id)
                .bind(status)
                .bind(now)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn test_address() -> ShippingAddress {
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

    fn spec_order(user_id: &str) -> NewOrder {
        // [{R100 × 2}, {R500 × 1}] → subtotal R700, shipping R150,
        // tax R105, total R955.00
        let items = vec![
            NewOrderItem {
                product_id: "p1".to_string(),
                name: "Rooibos Tea".to_string(),
                unit_price_cents: 10_000,
                quantity: 2,
            },
            NewOrderItem {
                product_id: "p2".to_string(),
                name: "Karoo Lamb Box".to_string(),
                unit_price_cents: 50_000,
                quantity: 1,
            },
        ];
        NewOrder {
            user_id: user_id.to_string(),
            items,
            totals: CheckoutTotals::compute(Money::from_cents(70_000)),
            payment_method: PaymentMethod::Ozow,
            shipping_address: test_address(),
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_order_generates_id_and_equal_timestamps() {
        let db = test_db().await;

        let order = db.orders().create_order(spec_order("user-1")).await.unwrap();

        assert!(!order.id.is_empty());
        assert_eq!(order.created_at, order.updated_at);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.total_cents, 95_500);

        // Round-trips with items intact
        let fetched = db.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.items.len(), 2);
        assert_eq!(fetched.items[0].name, "Rooibos Tea");
        assert_eq!(fetched.created_at, fetched.updated_at);
        assert_eq!(fetched.shipping_address.city, "Cape Town");
    }

    #[tokio::test]
    async fn test_create_order_rejects_inconsistent_totals() {
        let db = test_db().await;

        let mut new_order = spec_order("user-1");
        new_order.totals.total_cents += 1;

        let err = db.orders().create_order(new_order).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidTotals { .. }));
    }

    #[tokio::test]
    async fn test_create_order_rejects_empty_user() {
        let db = test_db().await;

        let err = db.orders().create_order(spec_order("  ")).await.unwrap_err();
        assert!(matches!(err, DbError::MissingUserId));
    }

    #[tokio::test]
    async fn test_get_by_user_id_empty_is_explicit_error() {
        let db = test_db().await;

        let err = db.orders().get_by_user_id("").await.unwrap_err();
        assert!(matches!(err, DbError::MissingUserId));

        let err = db.orders().get_by_user_id("   ").await.unwrap_err();
        assert!(matches!(err, DbError::MissingUserId));
    }

    #[tokio::test]
    async fn test_get_by_user_id_newest_first() {
        let db = test_db().await;
        let orders = db.orders();

        let first = orders.create_order(spec_order("user-1")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = orders.create_order(spec_order("user-1")).await.unwrap();

        // Another user's order must not appear
        orders.create_order(spec_order("user-2")).await.unwrap();

        let history = orders.get_by_user_id("user-1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
    }

    #[tokio::test]
    async fn test_get_by_user_id_no_orders_is_empty_not_error() {
        let db = test_db().await;
        let history = db.orders().get_by_user_id("user-without-orders").await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = test_db().await;
        let orders = db.orders();

        let order = orders.create_order(spec_order("user-1")).await.unwrap();
        orders
            .update_status(&order.id, OrderStatus::Shipped)
            .await
            .unwrap();
        orders
            .update_payment_status(&order.id, PaymentStatus::Paid)
            .await
            .unwrap();

        let fetched = orders.get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, OrderStatus::Shipped);
        assert_eq!(fetched.payment_status, PaymentStatus::Paid);
        assert!(fetched.updated_at >= fetched.created_at);

        let err = orders
            .update_status("missing", OrderStatus::Shipped)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
