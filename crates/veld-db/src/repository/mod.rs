//! # Repository Layer
//!
//! Data access implementations following the repository pattern.
//!
//! ## Design
//! Each repository wraps the shared connection pool and exposes the
//! operations the storefront needs for one entity. Repositories are
//! cheap to construct; get them from [`crate::Database`] accessors
//! rather than holding them long-term.
//!
//! ## Modules
//! - [`order`] - Order creation and history
//! - [`product`] - Product catalog CRUD and search
//! - [`faq`] - FAQ entries, grouped by category
//! - [`wishlist`] - Per-user saved products

pub mod faq;
pub mod order;
pub mod product;
pub mod wishlist;

pub use faq::{FaqRepository, NewFaq};
pub use order::{NewOrder, NewOrderItem, OrderRepository};
pub use product::{NewProduct, ProductRepository, ProductUpdate};
pub use wishlist::WishlistRepository;
