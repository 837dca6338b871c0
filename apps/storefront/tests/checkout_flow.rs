//! End-to-end checkout flow against an in-memory database.
//!
//! Covers the full wizard path (shipping → payment → review → order),
//! the gates that keep incomplete checkouts from submitting, and the
//! cart-clearing rule.

use veld_core::checkout::{CheckoutStep, PaymentSelection};
use veld_core::{OrderStatus, PaymentMethod, PaymentStatus, ShippingAddress};
use veld_db::{Database, DbConfig, NewProduct};
use veld_storefront::checkout::CheckoutService;
use veld_storefront::error::ErrorCode;
use veld_storefront::state::{AuthState, AuthUser, CartState};

struct Harness {
    db: Database,
    checkout: CheckoutService,
    auth: AuthState,
    cart: CartState,
}

async fn harness() -> Harness {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let checkout = CheckoutService::new(&db);
    Harness {
        checkout,
        auth: AuthState::new(),
        cart: CartState::new(),
        db,
    }
}

fn signed_in_user() -> AuthUser {
    AuthUser {
        uid: "user-1".to_string(),
        email: "thandi@example.co.za".to_string(),
        display_name: Some("Thandi".to_string()),
    }
}

fn address() -> ShippingAddress {
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

async fn seed_product(h: &Harness, sku: &str, name: &str, price_cents: i64) -> veld_core::Product {
    h.db.products()
        .create(NewProduct {
            sku: sku.to_string(),
            name: name.to_string(),
            description: None,
            category: "pantry".to_string(),
            price_cents,
            image_url: None,
            stock: 50,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn happy_path_places_order_and_clears_cart() {
    let h = harness().await;
    h.auth.sign_in(signed_in_user());

    let tea = seed_product(&h, "TEA-001", "Rooibos Tea", 10_000).await;
    let lamb = seed_product(&h, "PAN-001", "Karoo Lamb Box", 50_000).await;

    h.cart
        .with_cart_mut(|c| {
            c.add_item(&tea, 2)?;
            c.add_item(&lamb, 1)
        })
        .unwrap();

    let mut wizard = h.checkout.begin(&h.cart).unwrap();
    wizard.set_shipping(address());
    assert_eq!(wizard.advance().unwrap(), CheckoutStep::Payment);
    wizard.set_payment(PaymentSelection::Ozow);
    assert_eq!(wizard.advance().unwrap(), CheckoutStep::Review);

    let totals = h.checkout.review_totals(&h.cart);
    assert_eq!(totals.subtotal_cents, 70_000);
    assert_eq!(totals.shipping_cents, 15_000);
    assert_eq!(totals.tax_cents, 10_500);
    assert_eq!(totals.total_cents, 95_500);
    assert_eq!(totals.total().to_string(), "R955.00");

    let order = h
        .checkout
        .place_order(&wizard, &h.auth, &h.cart)
        .await
        .unwrap();

    assert_eq!(order.total_cents, 95_500);
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.payment_method, PaymentMethod::Ozow);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.created_at, order.updated_at);

    // Cart is cleared only after a successful submission
    assert!(h.cart.with_cart(|c| c.is_empty()));

    // The order shows up in the user's history
    let history = h.checkout.order_history(&h.auth).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, order.id);
    assert_eq!(history[0].shipping_address.city, "Cape Town");
}

#[tokio::test]
async fn free_shipping_above_threshold() {
    let h = harness().await;
    h.auth.sign_in(signed_in_user());

    let potjie = seed_product(&h, "HOM-001", "Potjie Pot", 200_000).await;
    h.cart.with_cart_mut(|c| c.add_item(&potjie, 1)).unwrap();

    let totals = h.checkout.review_totals(&h.cart);
    assert_eq!(totals.shipping_cents, 0);
    assert_eq!(totals.total_cents, 230_000);
}

#[tokio::test]
async fn empty_cart_cannot_begin_checkout() {
    let h = harness().await;
    let err = h.checkout.begin(&h.cart).unwrap_err();
    assert_eq!(err.code, ErrorCode::CartError);
}

#[tokio::test]
async fn cannot_submit_before_review() {
    let h = harness().await;
    h.auth.sign_in(signed_in_user());

    let tea = seed_product(&h, "TEA-001", "Rooibos Tea", 10_000).await;
    h.cart.with_cart_mut(|c| c.add_item(&tea, 1)).unwrap();

    let mut wizard = h.checkout.begin(&h.cart).unwrap();

    // Still on Shipping
    let err = h
        .checkout
        .place_order(&wizard, &h.auth, &h.cart)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::CheckoutError);

    // On Payment
    wizard.set_shipping(address());
    wizard.advance().unwrap();
    let err = h
        .checkout
        .place_order(&wizard, &h.auth, &h.cart)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::CheckoutError);

    // Nothing was written, cart intact
    assert!(!h.cart.with_cart(|c| c.is_empty()));
    let history = h.checkout.order_history(&h.auth).await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn incomplete_address_blocks_advance() {
    let h = harness().await;
    let tea = seed_product(&h, "TEA-001", "Rooibos Tea", 10_000).await;
    h.cart.with_cart_mut(|c| c.add_item(&tea, 1)).unwrap();

    let mut wizard = h.checkout.begin(&h.cart).unwrap();
    let mut incomplete = address();
    incomplete.city = String::new();
    wizard.set_shipping(incomplete);

    assert!(wizard.advance().is_err());
    assert_eq!(wizard.step(), CheckoutStep::Shipping);
}

#[tokio::test]
async fn submission_requires_signed_in_user() {
    let h = harness().await;

    let tea = seed_product(&h, "TEA-001", "Rooibos Tea", 10_000).await;
    h.cart.with_cart_mut(|c| c.add_item(&tea, 1)).unwrap();

    let mut wizard = h.checkout.begin(&h.cart).unwrap();
    wizard.set_shipping(address());
    wizard.advance().unwrap();
    wizard.set_payment(PaymentSelection::Eft {
        reference: "VELD-1234".to_string(),
    });
    wizard.advance().unwrap();

    let err = h
        .checkout
        .place_order(&wizard, &h.auth, &h.cart)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthRequired);

    // Failed submission leaves the wizard on Review and the cart intact
    assert_eq!(wizard.step(), CheckoutStep::Review);
    assert!(!h.cart.with_cart(|c| c.is_empty()));

    // Signing in and retrying succeeds without re-entering anything
    h.auth.sign_in(signed_in_user());
    let order = h
        .checkout
        .place_order(&wizard, &h.auth, &h.cart)
        .await
        .unwrap();
    assert_eq!(order.payment_method, PaymentMethod::Eft);
    assert!(h.cart.with_cart(|c| c.is_empty()));
}

#[tokio::test]
async fn going_back_preserves_entered_data() {
    let h = harness().await;
    let tea = seed_product(&h, "TEA-001", "Rooibos Tea", 10_000).await;
    h.cart.with_cart_mut(|c| c.add_item(&tea, 1)).unwrap();

    let mut wizard = h.checkout.begin(&h.cart).unwrap();
    wizard.set_shipping(address());
    wizard.advance().unwrap();
    wizard.set_payment(PaymentSelection::Ozow);
    wizard.advance().unwrap();

    wizard.back();
    wizard.back();
    assert_eq!(wizard.step(), CheckoutStep::Shipping);
    assert_eq!(wizard.shipping().city, "Cape Town");
    assert!(wizard.payment().is_some());

    // Forward again without re-entering data
    wizard.advance().unwrap();
    assert_eq!(wizard.advance().unwrap(), CheckoutStep::Review);
}
