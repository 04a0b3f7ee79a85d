//! Handlers for the `/admin` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use coursehub_db::models::course::Course;
use coursehub_db::models::enrollment::Enrollment;
use coursehub_db::models::user::UserResponse;
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Response for `GET /admin/overview`: every user, course, and enrollment.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub users: Vec<UserResponse>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
}

/// GET /api/v1/admin/overview
///
/// Aggregate view of the whole platform. Admin only.
pub async fn overview(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<OverviewResponse>> {
    let users = UserRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    let courses = CourseRepo::list_all(&state.pool).await?;
    let enrollments = EnrollmentRepo::list_all(&state.pool).await?;

    Ok(Json(OverviewResponse {
        users,
        courses,
        enrollments,
    }))
}
