//! Per-lesson completion tracking within an enrollment.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A lesson_progress row: one lesson's completion state within one enrollment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LessonProgress {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub lesson_id: DbId,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
}
