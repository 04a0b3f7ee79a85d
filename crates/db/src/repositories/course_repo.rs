//! Repository for the `courses` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use coursehub_core::types::DbId;

use crate::models::course::{Course, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category_id, instructor_id, price, \
                        duration_hours, difficulty_level, image_url, is_published, \
                        created_at, updated_at";

/// Provides CRUD operations for courses and their lesson batches.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a course and its initial lessons in one transaction.
    ///
    /// Lesson entries with blank titles are skipped; `order_index` is each
    /// entry's position in the submitted list (so skipped entries leave gaps,
    /// which is fine -- order_index carries no uniqueness guarantee).
    pub async fn create_with_lessons(
        pool: &PgPool,
        instructor_id: DbId,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO courses
                (title, description, category_id, instructor_id, price,
                 duration_hours, difficulty_level, image_url, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE)
             RETURNING {COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(instructor_id)
            .bind(input.price)
            .bind(input.duration_hours)
            .bind(input.difficulty_level)
            .bind(&input.image_url)
            .fetch_one(&mut *tx)
            .await?;

        for (index, lesson) in input.lessons.iter().enumerate() {
            if lesson.title.trim().is_empty() {
                continue;
            }
            sqlx::query(
                "INSERT INTO lessons
                    (course_id, title, content, video_url, duration_minutes, order_index)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(course.id)
            .bind(&lesson.title)
            .bind(&lesson.content)
            .bind(&lesson.video_url)
            .bind(lesson.duration_minutes)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(course)
    }

    /// Apply a full field update plus lesson edits in one transaction.
    ///
    /// Lesson edits are keyed by lesson id and applied only when the target
    /// lesson belongs to `id` -- the `AND course_id = ` guard in the UPDATE
    /// prevents cross-course lesson tampering.
    ///
    /// Returns `None` if no course with the given `id` exists.
    pub async fn update_with_lessons(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE courses SET
                title = $2,
                description = $3,
                category_id = $4,
                price = $5,
                duration_hours = $6,
                difficulty_level = $7,
                image_url = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.price)
            .bind(input.duration_hours)
            .bind(input.difficulty_level)
            .bind(&input.image_url)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(course) = course else {
            tx.rollback().await?;
            return Ok(None);
        };

        for edit in &input.lessons {
            sqlx::query(
                "UPDATE lessons SET
                    title = $3,
                    content = $4,
                    video_url = $5,
                    duration_minutes = $6
                 WHERE id = $1 AND course_id = $2",
            )
            .bind(edit.id)
            .bind(id)
            .bind(&edit.title)
            .bind(&edit.content)
            .bind(&edit.video_url)
            .bind(edit.duration_minutes)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(course))
    }

    /// Find a course by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published courses, newest first.
    ///
    /// Optional filters: category equality and a case-sensitive substring
    /// match against title OR description. An empty search string means
    /// "no search filter".
    pub async fn list_published(
        pool: &PgPool,
        category_id: Option<DbId>,
        search: Option<&str>,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {COLUMNS} FROM courses WHERE is_published = TRUE"
        ));

        if let Some(category_id) = category_id {
            builder.push(" AND category_id = ").push_bind(category_id);
        }

        if let Some(search) = search.filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            builder
                .push(" AND (title LIKE ")
                .push_bind(pattern.clone())
                .push(" OR description LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        builder.push(" ORDER BY created_at DESC");

        builder.build_query_as::<Course>().fetch_all(pool).await
    }

    /// A random sample of published courses for the home listing.
    ///
    /// Ordering is deliberately non-deterministic; this is cosmetic.
    pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE is_published = TRUE
             ORDER BY RANDOM() LIMIT $1"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List every course created by the given instructor.
    pub async fn list_by_instructor(
        pool: &PgPool,
        instructor_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE instructor_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(instructor_id)
            .fetch_all(pool)
            .await
    }

    /// List all courses regardless of publication state (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY created_at DESC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Delete a course. Lessons and enrollments go with it via FK cascade.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
