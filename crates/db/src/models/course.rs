//! Course entity model and DTOs.

use coursehub_core::lenient::{lenient_f64, lenient_opt_i32};
use coursehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Course difficulty, stored as the Postgres enum `difficulty_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "difficulty_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// A course row from the `courses` table.
///
/// Owned by exactly one instructor (`instructor_id`); ownership checks always
/// re-derive from this persisted value, never from client input.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: Option<DbId>,
    pub instructor_id: DbId,
    pub price: f64,
    pub duration_hours: Option<i32>,
    pub difficulty_level: DifficultyLevel,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A lesson entry submitted alongside a new course.
///
/// Entries with blank titles are skipped at insert time; `order_index` is the
/// entry's position in the submitted list.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLesson {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub duration_minutes: Option<i32>,
}

/// DTO for creating a new course with its initial lessons.
///
/// `price` and `duration_hours` tolerate string input (legacy form behavior):
/// non-numeric values fall back to 0 / null instead of rejecting the request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub duration_hours: Option<i32>,
    #[serde(default)]
    pub difficulty_level: DifficultyLevel,
    pub image_url: Option<String>,
    #[serde(default)]
    pub lessons: Vec<NewLesson>,
}

/// An edit to an existing lesson, keyed by lesson id.
///
/// Only applied when the lesson actually belongs to the course being edited.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonEdit {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub duration_minutes: Option<i32>,
}

/// DTO for updating a course. Field updates apply unconditionally.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourse {
    pub title: String,
    pub description: String,
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_opt_i32")]
    pub duration_hours: Option<i32>,
    #[serde(default)]
    pub difficulty_level: DifficultyLevel,
    pub image_url: Option<String>,
    #[serde(default)]
    pub lessons: Vec<LessonEdit>,
}
