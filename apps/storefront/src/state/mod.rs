//! # State Module
//!
//! Session state for the storefront app shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct owning everything behind one lock,
//! each concern gets its own state type:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: States can be constructed independently in tests
//! 3. **Reduced Contention**: Cart writes don't block theme reads
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                                │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  AuthState   │ │  CartState   │ │WishlistState │ │  ThemeState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  Arc<Mutex<  │   │
//! │  │   Option<    │ │    Cart      │ │   Wishlist   │ │    Theme     │   │
//! │  │   AuthUser>  │ │  >>          │ │  >>          │ │  >>          │   │
//! │  │  >>          │ │              │ │  + db writes │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  LIFETIME:                                                              │
//! │  • Cart: session only, cleared when an order is placed                  │
//! │  • Wishlist: mirrored to the database per signed-in user                │
//! │  • Auth/Theme: session only                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod cart;
pub mod theme;
pub mod wishlist;

pub use auth::{AuthState, AuthUser};
pub use cart::CartState;
pub use theme::{Theme, ThemeState};
pub use wishlist::WishlistState;
