//! Handlers for the `/courses` resource: public catalog reads plus
//! instructor-gated authoring operations.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use coursehub_core::error::CoreError;
use coursehub_core::types::DbId;
use coursehub_db::models::course::{Course, CreateCourse, UpdateCourse};
use coursehub_db::models::lesson::Lesson;
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::state::AppState;

/// Default number of courses in the featured sample.
const DEFAULT_FEATURED_LIMIT: i64 = 6;
/// Upper bound for the featured sample size.
const MAX_FEATURED_LIMIT: i64 = 24;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /courses` (`?category_id=&search=`).
#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub category_id: Option<DbId>,
    pub search: Option<String>,
}

/// Query parameters for `GET /courses/featured`.
#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<i64>,
}

/// Course detail payload: the course, its ordered lessons, and whether the
/// calling user (if any) is enrolled.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub lessons: Vec<Lesson>,
    pub is_enrolled: bool,
}

// ---------------------------------------------------------------------------
// Catalog (read side)
// ---------------------------------------------------------------------------

/// GET /api/v1/courses
///
/// Published courses, newest first, optionally filtered by category and/or a
/// case-sensitive substring search over title and description.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Json<Vec<Course>>> {
    let courses =
        CourseRepo::list_published(&state.pool, params.category_id, params.search.as_deref())
            .await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/featured
///
/// A random sample of published courses for the home listing.
pub async fn featured(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> AppResult<Json<Vec<Course>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
        .clamp(1, MAX_FEATURED_LIMIT);
    let courses = CourseRepo::featured(&state.pool, limit).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
///
/// Course detail with lessons. Anonymous callers get `is_enrolled: false`.
pub async fn get_by_id(
    State(state): State<AppState>,
    OptionalAuthUser(user): OptionalAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseDetail>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    let lessons = LessonRepo::list_by_course(&state.pool, id).await?;

    let is_enrolled = match user {
        Some(user) => EnrollmentRepo::find_by_user_and_course(&state.pool, user.user_id, id)
            .await?
            .is_some(),
        None => false,
    };

    Ok(Json(CourseDetail {
        course,
        lessons,
        is_enrolled,
    }))
}

// ---------------------------------------------------------------------------
// Authoring (write side)
// ---------------------------------------------------------------------------

/// POST /api/v1/courses
///
/// Create a course owned by the caller, plus its initial lessons, in one
/// transaction. Lessons with blank titles are silently skipped.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = CourseRepo::create_with_lessons(&state.pool, user.user_id, &input).await?;
    tracing::info!(course_id = course.id, instructor_id = user.user_id, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/v1/courses/{id}
///
/// Update a course and its lessons. Ownership is re-derived from the
/// persisted `instructor_id` before anything is written.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    if course.instructor_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this course".into(),
        )));
    }

    let updated = CourseRepo::update_with_lessons(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/courses/{id}
///
/// Delete a course; lessons and enrollments cascade. Ownership-gated.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    if course.instructor_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this course".into(),
        )));
    }

    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(course_id = id, "Course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
    }
}
