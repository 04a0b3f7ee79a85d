//! Category entity model.

use coursehub_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A category row from the `categories` table. Flat, no hierarchy.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}
