//! Handlers for the `/me` resource (the authenticated user's own profile).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use coursehub_core::error::CoreError;
use coursehub_db::models::course::Course;
use coursehub_db::models::enrollment::Enrollment;
use coursehub_db::models::user::{UpdateProfile, UserResponse};
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::auth::MIN_PASSWORD_LENGTH;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /me`. All fields optional; only provided fields change.
#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// An enrollment joined with its course, for the dashboard.
#[derive(Debug, Serialize)]
pub struct EnrolledCourse {
    pub enrollment: Enrollment,
    pub course: Course,
}

/// Response for `GET /me/courses`: courses the user authored and courses
/// they are enrolled in.
#[derive(Debug, Serialize)]
pub struct MyCoursesResponse {
    pub created: Vec<Course>,
    pub enrolled: Vec<EnrolledCourse>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/me
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/me
///
/// Update profile fields. A new email must not belong to another account.
/// Supplying `password` changes the password after the same strength check
/// used at registration.
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateMeRequest>,
) -> AppResult<Json<UserResponse>> {
    if let Some(email) = &input.email {
        if let Some(existing) = UserRepo::find_by_email(&state.pool, email).await? {
            if existing.id != user.user_id {
                return Err(AppError::Core(CoreError::Conflict(
                    "Email is already in use".into(),
                )));
            }
        }
    }

    if let Some(password) = &input.password {
        validate_password_strength(password, MIN_PASSWORD_LENGTH)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
        UserRepo::update_password(&state.pool, user.user_id, &password_hash).await?;
    }

    let updated = UserRepo::update_profile(
        &state.pool,
        user.user_id,
        &UpdateProfile {
            full_name: input.full_name,
            email: input.email,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "User",
        id: user.user_id,
    }))?;

    Ok(Json(updated.into()))
}

/// GET /api/v1/me/courses
///
/// The user's dashboard: courses they authored plus their enrollments, each
/// joined with its course. Enrollments whose course has vanished between the
/// two reads are dropped rather than erroring.
pub async fn my_courses(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<MyCoursesResponse>> {
    let created = CourseRepo::list_by_instructor(&state.pool, user.user_id).await?;

    let enrollments = EnrollmentRepo::list_by_user(&state.pool, user.user_id).await?;
    let mut enrolled = Vec::with_capacity(enrollments.len());
    for enrollment in enrollments {
        if let Some(course) = CourseRepo::find_by_id(&state.pool, enrollment.course_id).await? {
            enrolled.push(EnrolledCourse { enrollment, course });
        }
    }

    Ok(Json(MyCoursesResponse { created, enrolled }))
}
