//! # Seed Data Generator
//!
//! Populates the database with a development catalog and FAQ content.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p veld-db --bin seed
//!
//! # Specify database path
//! cargo run -p veld-db --bin seed -- --db ./data/veld.db
//! ```
//!
//! ## Generated Data
//! - A fixed South African catalog across pantry, snacks, beverages and
//!   homeware (prices in ZAR cents)
//! - FAQ entries for the shipping, orders and payments categories
//!
//! Skips seeding if the catalog already has products.

use std::env;
use veld_db::{Database, DbConfig, NewFaq, NewProduct};

/// (sku, name, description, category, price in rand, stock)
const PRODUCTS: &[(&str, &str, &str, &str, &str, i64)] = &[
    (
        "TEA-001",
        "Rooibos Tea 250g",
        "Loose-leaf rooibos from the Cederberg mountains",
        "pantry",
        "49.99",
        40,
    ),
    (
        "TEA-002",
        "Honeybush Tea 200g",
        "Naturally sweet honeybush blend",
        "pantry",
        "54.99",
        25,
    ),
    (
        "PAN-001",
        "Karoo Lamb Box",
        "Free-range Karoo lamb selection, frozen",
        "pantry",
        "500.00",
        8,
    ),
    (
        "PAN-002",
        "Mrs Ball's Chutney 470g",
        "The original peach chutney",
        "pantry",
        "42.50",
        60,
    ),
    (
        "SNK-001",
        "Biltong Box 500g",
        "Traditional beef biltong, sliced",
        "snacks",
        "150.00",
        30,
    ),
    (
        "SNK-002",
        "Droëwors 250g",
        "Air-dried boerewors sticks",
        "snacks",
        "89.99",
        35,
    ),
    (
        "BEV-001",
        "Appletiser 6-Pack",
        "Sparkling apple juice, 330ml cans",
        "beverages",
        "74.99",
        50,
    ),
    (
        "BEV-002",
        "Pinotage 750ml",
        "Stellenbosch pinotage, single bottle",
        "beverages",
        "120.00",
        18,
    ),
    (
        "HOM-001",
        "Potjie Pot No. 3",
        "Cast iron three-legged potjie",
        "homeware",
        "649.00",
        6,
    ),
    (
        "HOM-002",
        "Shweshwe Apron",
        "Cotton apron in traditional shweshwe print",
        "homeware",
        "185.00",
        15,
    ),
];

/// (question, answer, category, position)
const FAQS: &[(&str, &str, &str, i64)] = &[
    (
        "Where do you deliver?",
        "We deliver anywhere in South Africa via courier.",
        "shipping",
        0,
    ),
    (
        "How much is shipping?",
        "A flat R150 applies to orders of R1500 or less. Orders above R1500 ship free.",
        "shipping",
        1,
    ),
    (
        "How long does delivery take?",
        "Main centres take 2-3 working days; outlying areas 3-5.",
        "shipping",
        2,
    ),
    (
        "Can I cancel an order?",
        "Orders can be cancelled while still in the processing state. Contact support with your order number.",
        "orders",
        0,
    ),
    (
        "How do I track my order?",
        "Your order history on the profile page shows the current status of every order.",
        "orders",
        1,
    ),
    (
        "Which payment methods do you accept?",
        "Credit and debit cards, Ozow instant EFT, and manual EFT with a payment reference.",
        "payments",
        0,
    ),
    (
        "Do your prices include VAT?",
        "Catalog prices exclude VAT; 15% VAT is added at checkout and shown before you pay.",
        "payments",
        1,
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./veld_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Veld Storefront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./veld_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Veld Storefront Seed Data Generator");
    println!("======================================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().list().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} products", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    for (sku, name, description, category, price, stock) in PRODUCTS {
        let price = veld_core::Money::parse(price)?;
        db.products()
            .create(NewProduct {
                sku: sku.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                category: category.to_string(),
                price_cents: price.cents(),
                image_url: None,
                stock: *stock,
            })
            .await?;
    }
    println!("  {} products", PRODUCTS.len());

    for (question, answer, category, position) in FAQS {
        db.faqs()
            .create(NewFaq {
                question: question.to_string(),
                answer: answer.to_string(),
                category: category.to_string(),
                position: *position,
            })
            .await?;
    }
    println!("  {} FAQ entries", FAQS.len());

    println!();
    println!("Verifying...");
    let pantry = db.products().list_by_category("pantry").await?;
    println!("  Category 'pantry': {} products", pantry.len());
    let matches = db.products().search("biltong").await?;
    println!("  Search 'biltong': {} results", matches.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
