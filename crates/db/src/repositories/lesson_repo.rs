//! Repository for the `lessons` table.
//!
//! Lesson inserts happen inside [`CourseRepo`](crate::repositories::CourseRepo)
//! transactions; this repo covers standalone reads and deletes.

use sqlx::PgPool;

use coursehub_core::types::DbId;

use crate::models::lesson::Lesson;

const COLUMNS: &str =
    "id, course_id, title, content, video_url, duration_minutes, order_index, created_at";

pub struct LessonRepo;

impl LessonRepo {
    /// Find a lesson by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a course's lessons in display order.
    pub async fn list_by_course(pool: &PgPool, course_id: DbId) -> Result<Vec<Lesson>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM lessons WHERE course_id = $1 ORDER BY order_index, id");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Count lessons in a course.
    pub async fn count_by_course(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lessons WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete a lesson. Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
