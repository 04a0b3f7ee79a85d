//! Handlers for enrollment and progress tracking, nested under `/courses`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use coursehub_core::error::CoreError;
use coursehub_core::types::{DbId, Timestamp};
use coursehub_db::models::enrollment::Enrollment;
use coursehub_db::models::lesson_progress::LessonProgress;
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, LessonProgressRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `POST /courses/{id}/enroll`.
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    /// True when the caller was already enrolled and no new row was created.
    pub already_enrolled: bool,
}

/// Response for `GET /courses/{id}/progress`.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub enrollment_id: DbId,
    pub course_id: DbId,
    pub progress_percent: i32,
    pub enrolled_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub lessons: Vec<LessonProgress>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/courses/{id}/enroll
///
/// Enroll the caller in a course. Enrolling twice is a no-op that returns the
/// existing enrollment with `already_enrolled: true` and status 200; a fresh
/// enrollment returns 201. Two racing first enrollments are resolved by the
/// unique constraint on (user, course), so at most one row ever exists.
pub async fn enroll(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<EnrollResponse>)> {
    let course = CourseRepo::find_by_id(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    if let Some(existing) =
        EnrollmentRepo::find_by_user_and_course(&state.pool, user.user_id, course.id).await?
    {
        return Ok((
            StatusCode::OK,
            Json(EnrollResponse {
                enrollment: existing,
                already_enrolled: true,
            }),
        ));
    }

    let enrollment = EnrollmentRepo::create(&state.pool, user.user_id, course.id).await?;
    tracing::info!(user_id = user.user_id, course_id = course.id, "User enrolled");

    Ok((
        StatusCode::CREATED,
        Json(EnrollResponse {
            enrollment,
            already_enrolled: false,
        }),
    ))
}

/// GET /api/v1/courses/{id}/progress
///
/// The caller's progress in a course: overall percentage plus the per-lesson
/// completion records. 404 when the caller is not enrolled.
pub async fn progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<ProgressResponse>> {
    let enrollment =
        EnrollmentRepo::find_by_user_and_course(&state.pool, user.user_id, course_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Enrollment",
                id: course_id,
            }))?;

    let lessons = LessonProgressRepo::list_by_enrollment(&state.pool, enrollment.id).await?;

    Ok(Json(ProgressResponse {
        enrollment_id: enrollment.id,
        course_id: enrollment.course_id,
        progress_percent: enrollment.progress_percent,
        enrolled_at: enrollment.enrolled_at,
        completed_at: enrollment.completed_at,
        lessons,
    }))
}

/// POST /api/v1/courses/{course_id}/lessons/{lesson_id}/complete
///
/// Mark a lesson completed for the caller's enrollment and return the
/// recomputed enrollment. Idempotent: re-marking keeps the first completion
/// time. 404 when the caller is not enrolled or the lesson does not belong
/// to the course.
pub async fn complete_lesson(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, lesson_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Enrollment>> {
    let enrollment =
        EnrollmentRepo::find_by_user_and_course(&state.pool, user.user_id, course_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Enrollment",
                id: course_id,
            }))?;

    let lesson = LessonRepo::find_by_id(&state.pool, lesson_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }))?;

    if lesson.course_id != course_id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }));
    }

    let updated = LessonProgressRepo::mark_completed(&state.pool, enrollment.id, lesson.id).await?;
    Ok(Json(updated))
}
