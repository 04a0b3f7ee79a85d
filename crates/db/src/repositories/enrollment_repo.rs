//! Repository for the `enrollments` table.

use sqlx::PgPool;

use coursehub_core::types::DbId;

use crate::models::enrollment::Enrollment;

const COLUMNS: &str = "id, user_id, course_id, enrolled_at, progress_percent, completed_at";

/// Provides enrollment creation and lookups.
///
/// There is no delete: no exposed operation removes an enrollment except the
/// cascade from course deletion.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert an enrollment with zero progress.
    ///
    /// Callers check for an existing (user, course) row first; if two
    /// requests race past that check, `uq_enrollments_user_course` rejects
    /// the second insert (surfaced as a conflict, never a duplicate row).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (user_id, course_id, progress_percent)
             VALUES ($1, $2, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Find the enrollment for a (user, course) pair, if any.
    pub async fn find_by_user_and_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// List all enrollments for a user, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 ORDER BY enrolled_at DESC");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all enrollments for a course.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM enrollments WHERE course_id = $1 ORDER BY enrolled_at DESC");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// List every enrollment (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments ORDER BY enrolled_at DESC");
        sqlx::query_as::<_, Enrollment>(&query).fetch_all(pool).await
    }
}
