//! # CSV Catalog Import
//!
//! Bulk import of products and FAQ entries from CSV, for the admin path.
//!
//! ## Behaviour
//! - Products are upserted by SKU: unknown SKUs insert, known SKUs update
//! - Prices are exact decimal strings ("49.99", "R1500"), never floats
//! - A bad row is recorded and skipped; the rest of the file still imports
//!
//! ## Product CSV Format
//! ```csv
//! sku,name,description,category,price,stock,image_url
//! TEA-001,Rooibos Tea,Loose-leaf rooibos,pantry,49.99,25,
//! ```
//!
//! ## FAQ CSV Format
//! ```csv
//! question,answer,category,position
//! Where do you deliver?,Anywhere in South Africa.,shipping,0
//! ```

use serde::Deserialize;
use std::io::Read;
use tracing::{info, warn};

use crate::error::DbResult;
use crate::repository::{FaqRepository, NewFaq, NewProduct, ProductRepository};
use veld_core::Money;

// =============================================================================
// Summary
// =============================================================================

/// One rejected row, with its 1-based line number and reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: u64,
    pub message: String,
}

/// Outcome of a CSV import run.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Rows that created a new record.
    pub inserted: usize,
    /// Rows that updated an existing record.
    pub updated: usize,
    /// Rows rejected; details in `errors`.
    pub skipped: usize,
    pub errors: Vec<RowError>,
}

impl ImportSummary {
    fn reject(&mut self, line: u64, message: impl Into<String>) {
        self.skipped += 1;
        self.errors.push(RowError {
            line,
            message: message.into(),
        });
    }
}

// =============================================================================
// Product Import
// =============================================================================

#[derive(Debug, Deserialize)]
struct ProductCsvRow {
    sku: String,
    name: String,
    #[serde(default)]
    description: String,
    category: String,
    /// Exact decimal rand amount, e.g. "49.99" or "R1500".
    price: String,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    image_url: String,
}

fn blank_to_none(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Imports products from CSV, upserting by SKU.
pub async fn import_products_csv<R: Read>(
    repo: &ProductRepository,
    reader: R,
) -> DbResult<ImportSummary> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut summary = ImportSummary::default();

    for (index, record) in csv_reader.deserialize::<ProductCsvRow>().enumerate() {
        // Line 1 is the header row
        let line = index as u64 + 2;

        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!(line, error = %e, "Malformed product row");
                summary.reject(line, e.to_string());
                continue;
            }
        };

        if row.sku.trim().is_empty() || row.name.trim().is_empty() {
            summary.reject(line, "sku and name are required");
            continue;
        }
        if row.stock < 0 {
            summary.reject(line, "stock must not be negative");
            continue;
        }

        let price = match Money::parse(&row.price) {
            Ok(price) => price,
            Err(e) => {
                summary.reject(line, format!("invalid price '{}': {e}", row.price));
                continue;
            }
        };

        let new_product = NewProduct {
            sku: row.sku.trim().to_string(),
            name: row.name.trim().to_string(),
            description: blank_to_none(row.description),
            category: row.category.trim().to_string(),
            price_cents: price.cents(),
            image_url: blank_to_none(row.image_url),
            stock: row.stock,
        };

        match repo.upsert_by_sku(new_product).await {
            Ok(true) => summary.inserted += 1,
            Ok(false) => summary.updated += 1,
            Err(e) => {
                warn!(line, error = %e, "Product upsert failed");
                summary.reject(line, e.to_string());
            }
        }
    }

    info!(
        inserted = summary.inserted,
        updated = summary.updated,
        skipped = summary.skipped,
        "Product import complete"
    );
    Ok(summary)
}

// =============================================================================
// FAQ Import
// =============================================================================

#[derive(Debug, Deserialize)]
struct FaqCsvRow {
    question: String,
    answer: String,
    category: String,
    #[serde(default)]
    position: i64,
}

/// Imports FAQ entries from CSV. Always inserts; FAQ rows have no
/// business key to upsert on.
pub async fn import_faqs_csv<R: Read>(
    repo: &FaqRepository,
    reader: R,
) -> DbResult<ImportSummary> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut summary = ImportSummary::default();

    for (index, record) in csv_reader.deserialize::<FaqCsvRow>().enumerate() {
        let line = index as u64 + 2;

        let row = match record {
            Ok(row) => row,
            Err(e) => {
                summary.reject(line, e.to_string());
                continue;
            }
        };

        if row.question.trim().is_empty() || row.answer.trim().is_empty() {
            summary.reject(line, "question and answer are required");
            continue;
        }

        let new_faq = NewFaq {
            question: row.question.trim().to_string(),
            answer: row.answer.trim().to_string(),
            category: row.category.trim().to_string(),
            position: row.position,
        };

        match repo.create(new_faq).await {
            Ok(_) => summary.inserted += 1,
            Err(e) => summary.reject(line, e.to_string()),
        }
    }

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "FAQ import complete"
    );
    Ok(summary)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_product_import_inserts_and_updates() {
        let db = test_db().await;
        let repo = db.products();

        let csv = "sku,name,description,category,price,stock,image_url\n\
                   TEA-001,Rooibos Tea,Loose-leaf rooibos,pantry,49.99,25,\n\
                   BIL-001,Biltong Box,,snacks,R150,10,\n";
        let summary = import_products_csv(&repo, csv.as_bytes()).await.unwrap();
        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.updated, 0);
        assert!(summary.errors.is_empty());

        let biltong = repo.get_by_sku("BIL-001").await.unwrap().unwrap();
        assert_eq!(biltong.price_cents, 15_000);
        assert!(biltong.description.is_none());

        // Re-import with a changed price updates in place
        let csv = "sku,name,description,category,price,stock,image_url\n\
                   TEA-001,Rooibos Tea,Loose-leaf rooibos,pantry,52.50,20,\n";
        let summary = import_products_csv(&repo, csv.as_bytes()).await.unwrap();
        assert_eq!(summary.inserted, 0);
        assert_eq!(summary.updated, 1);

        let tea = repo.get_by_sku("TEA-001").await.unwrap().unwrap();
        assert_eq!(tea.price_cents, 5_250);
        assert_eq!(tea.stock, 20);
    }

    #[tokio::test]
    async fn test_product_import_skips_bad_rows_and_continues() {
        let db = test_db().await;
        let repo = db.products();

        let csv = "sku,name,description,category,price,stock,image_url\n\
                   ,Nameless,,pantry,10.00,1,\n\
                   TEA-001,Rooibos Tea,,pantry,not-a-price,1,\n\
                   TEA-002,Honeybush Tea,,pantry,54.99,5,\n";
        let summary = import_products_csv(&repo, csv.as_bytes()).await.unwrap();

        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.errors.len(), 2);
        assert_eq!(summary.errors[0].line, 2);
        assert_eq!(summary.errors[1].line, 3);

        assert!(repo.get_by_sku("TEA-002").await.unwrap().is_some());
        assert!(repo.get_by_sku("TEA-001").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_product_import_rejects_malformed_sku() {
        let db = test_db().await;
        let repo = db.products();

        // SKU format is enforced at the catalog write path; the bad row
        // is skipped and the rest of the file still imports
        let csv = "sku,name,description,category,price,stock,image_url\n\
                   BAD SKU,Spaced Out,,pantry,10.00,1,\n\
                   TEA-003,Buchu Tea,,pantry,64.99,5,\n";
        let summary = import_products_csv(&repo, csv.as_bytes()).await.unwrap();

        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors[0].line, 2);

        assert!(repo.get_by_sku("TEA-003").await.unwrap().is_some());
        assert!(repo.get_by_sku("BAD SKU").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_faq_import() {
        let db = test_db().await;
        let repo = db.faqs();

        let csv = "question,answer,category,position\n\
                   Where do you deliver?,Anywhere in South Africa.,shipping,0\n\
                   ,Missing question.,orders,0\n";
        let summary = import_faqs_csv(&repo, csv.as_bytes()).await.unwrap();

        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.skipped, 1);

        let shipping = repo.list_by_category("shipping").await.unwrap();
        assert_eq!(shipping.len(), 1);
    }
}
