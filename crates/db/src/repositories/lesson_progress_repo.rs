//! Repository for the `lesson_progress` table.

use sqlx::PgPool;

use coursehub_core::types::DbId;

use crate::models::enrollment::Enrollment;
use crate::models::lesson_progress::LessonProgress;

const COLUMNS: &str = "id, enrollment_id, lesson_id, is_completed, completed_at";

const ENROLLMENT_COLUMNS: &str =
    "id, user_id, course_id, enrolled_at, progress_percent, completed_at";

/// Tracks per-lesson completion within an enrollment.
pub struct LessonProgressRepo;

impl LessonProgressRepo {
    /// List completion records for an enrollment.
    pub async fn list_by_enrollment(
        pool: &PgPool,
        enrollment_id: DbId,
    ) -> Result<Vec<LessonProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson_progress WHERE enrollment_id = $1 ORDER BY lesson_id"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(enrollment_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a lesson completed and recompute the enrollment's progress.
    ///
    /// One transaction: upsert the completion record (idempotent -- marking
    /// the same lesson twice keeps the original completion time), then set
    /// `progress_percent = completed / total` and stamp the enrollment's
    /// `completed_at` on reaching 100%.
    ///
    /// Returns the updated enrollment row.
    pub async fn mark_completed(
        pool: &PgPool,
        enrollment_id: DbId,
        lesson_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO lesson_progress (enrollment_id, lesson_id, is_completed, completed_at)
             VALUES ($1, $2, TRUE, NOW())
             ON CONFLICT ON CONSTRAINT uq_lesson_progress_enrollment_lesson
             DO UPDATE SET
                is_completed = TRUE,
                completed_at = COALESCE(lesson_progress.completed_at, NOW())",
        )
        .bind(enrollment_id)
        .bind(lesson_id)
        .execute(&mut *tx)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM lessons
             WHERE course_id = (SELECT course_id FROM enrollments WHERE id = $1)",
        )
        .bind(enrollment_id)
        .fetch_one(&mut *tx)
        .await?;

        let (completed,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM lesson_progress
             WHERE enrollment_id = $1 AND is_completed = TRUE",
        )
        .bind(enrollment_id)
        .fetch_one(&mut *tx)
        .await?;

        // total is at least 1 here: the marked lesson exists in the course.
        let percent = ((completed * 100) / total.max(1)).min(100) as i32;

        let query = format!(
            "UPDATE enrollments SET
                progress_percent = $2,
                completed_at = CASE
                    WHEN $2 >= 100 THEN COALESCE(completed_at, NOW())
                    ELSE NULL
                END
             WHERE id = $1
             RETURNING {ENROLLMENT_COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(enrollment_id)
            .bind(percent)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(enrollment)
    }
}
