//! Enrollment entity model.

use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An enrollment row from the `enrollments` table.
///
/// The join record expressing that a user has registered access to a course.
/// At most one row exists per (user, course) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub enrolled_at: Timestamp,
    pub progress_percent: i32,
    pub completed_at: Option<Timestamp>,
}
