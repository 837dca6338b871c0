//! # FAQ Repository
//!
//! CRUD for the FAQ content page. Entries carry a `category` for the page
//! filter and a `position` for stable ordering within a category.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use veld_core::Faq;

/// Input for creating an FAQ entry.
#[derive(Debug, Clone)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub position: i64,
}

const SELECT_FAQ: &str = "\
    SELECT id, question, answer, category, position, created_at, updated_at \
    FROM faqs";

/// Repository for FAQ database operations.
#[derive(Debug, Clone)]
pub struct FaqRepository {
    pool: SqlitePool,
}

impl FaqRepository {
    /// Creates a new FaqRepository.
    pub fn new(pool: SqlitePool) -> Self {
        FaqRepository { pool }
    }

    /// Creates an FAQ entry.
    pub async fn create(&self, new_faq: NewFaq) -> DbResult<Faq> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO faqs (id, question, answer, category, position, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&id)
        .bind(&new_faq.question)
        .bind(&new_faq.answer)
        .bind(&new_faq.category)
        .bind(new_faq.position)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Faq {
            id,
            question: new_faq.question,
            answer: new_faq.answer,
            category: new_faq.category,
            position: new_faq.position,
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets an FAQ entry by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Faq>> {
        let faq = sqlx::query_as(&format!("{SELECT_FAQ} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(faq)
    }

    /// Lists all FAQ entries, grouped by category then position.
    pub async fn list(&self) -> DbResult<Vec<Faq>> {
        let faqs = sqlx::query_as(&format!("{SELECT_FAQ} ORDER BY category, position"))
            .fetch_all(&self.pool)
            .await?;

        Ok(faqs)
    }

    /// Lists FAQ entries for one category, in position order.
    pub async fn list_by_category(&self, category: &str) -> DbResult<Vec<Faq>> {
        let faqs = sqlx::query_as(&format!(
            "{SELECT_FAQ} WHERE category = ?1 ORDER BY position"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(faqs)
    }

    /// Replaces an FAQ entry's content.
    pub async fn update(&self, id: &str, new_faq: NewFaq) -> DbResult<Faq> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE faqs SET question = ?2, answer = ?3, category = ?4, position = ?5, \
             updated_at = ?6 WHERE id = ?1",
        )
        .bind(id)
        .bind(&new_faq.question)
        .bind(&new_faq.answer)
        .bind(&new_faq.category)
        .bind(new_faq.position)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Faq", id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Faq", id))
    }

    /// Deletes an FAQ entry. Hard delete: FAQs are content, not referenced
    /// by any other table.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Faq", id));
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

    fn faq(question: &str, category: &str, position: i64) -> NewFaq {
        NewFaq {
            question: question.to_string(),
            answer: "See our policy page.".to_string(),
            category: category.to_string(),
            position,
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_list_by_category_ordering() {
        let db = test_db().await;
        let faqs = db.faqs();

        faqs.create(faq("How long is delivery?", "shipping", 1)).await.unwrap();
        faqs.create(faq("Where do you deliver?", "shipping", 0)).await.unwrap();
        faqs.create(faq("Can I cancel an order?", "orders", 0)).await.unwrap();

        let shipping = faqs.list_by_category("shipping").await.unwrap();
        assert_eq!(shipping.len(), 2);
        assert_eq!(shipping[0].question, "Where do you deliver?");
        assert_eq!(shipping[1].question, "How long is delivery?");

        let all = faqs.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].category, "orders");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = test_db().await;
        let faqs = db.faqs();

        let created = faqs.create(faq("Old question?", "orders", 0)).await.unwrap();

        let updated = faqs
            .update(&created.id, faq("New question?", "orders", 2))
            .await
            .unwrap();
        assert_eq!(updated.question, "New question?");
        assert_eq!(updated.position, 2);

        faqs.delete(&created.id).await.unwrap();
        assert!(faqs.get_by_id(&created.id).await.unwrap().is_none());

        let err = faqs.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
