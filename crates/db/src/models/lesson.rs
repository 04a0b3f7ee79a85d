//! Lesson entity model.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A lesson row from the `lessons` table.
///
/// Ordered within its course by `order_index` (no uniqueness enforced).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub content: String,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub order_index: i32,
    pub created_at: Timestamp,
}
