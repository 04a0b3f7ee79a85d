//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Read-side access to categories (rows come from seed data).
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, description, icon FROM categories ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
