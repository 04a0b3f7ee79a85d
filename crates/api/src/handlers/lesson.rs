//! Handlers for the `/lessons` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use coursehub_db::repositories::{CourseRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response for `POST /lessons/{id}/delete`.
#[derive(Debug, Serialize)]
pub struct DeleteLessonResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/v1/lessons/{id}/delete
///
/// Delete a single lesson. Only the owner of the parent course may do this.
/// Access failures (missing lesson, not the owner) are HTTP errors; a
/// persistence failure after the checks pass is reported in the payload as
/// `{"success": false, "error": ...}` with status 200.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteLessonResponse>> {
    let lesson = LessonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }))?;

    let course = CourseRepo::find_by_id(&state.pool, lesson.course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: lesson.course_id,
        }))?;

    if course.instructor_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this course".into(),
        )));
    }

    match LessonRepo::delete(&state.pool, id).await {
        Ok(true) => Ok(Json(DeleteLessonResponse {
            success: true,
            error: None,
        })),
        Ok(false) => Ok(Json(DeleteLessonResponse {
            success: false,
            error: Some("Lesson was already deleted".into()),
        })),
        Err(e) => {
            tracing::error!(lesson_id = id, error = %e, "Lesson deletion failed");
            Ok(Json(DeleteLessonResponse {
                success: false,
                error: Some("Failed to delete lesson".into()),
            }))
        }
    }
}
