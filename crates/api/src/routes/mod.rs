pub mod admin;
pub mod auth;
pub mod category;
pub mod course;
pub mod health;
pub mod lesson;
pub mod me;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /categories                                      list (public)
///
/// /courses                                         list published (public), create (auth)
/// /courses/featured                                random published sample (public)
/// /courses/{id}                                    detail with lessons (public), update, delete (owner)
/// /courses/{id}/enroll                             enroll (auth, POST)
/// /courses/{id}/progress                           caller's progress (auth, GET)
/// /courses/{course_id}/lessons/{lesson_id}/complete  mark lesson done (auth, POST)
///
/// /lessons/{id}/delete                             delete lesson (owner, POST)
///
/// /me                                              get, update own profile (auth)
/// /me/courses                                      authored + enrolled courses (auth)
///
/// /admin/overview                                  users, courses, enrollments (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Category reference data.
        .nest("/categories", category::router())
        // Catalog, authoring, enrollment, progress.
        .nest("/courses", course::router())
        // Single-lesson deletion.
        .nest("/lessons", lesson::router())
        // The authenticated user's own profile and dashboard.
        .nest("/me", me::router())
        // Platform-wide aggregate view.
        .nest("/admin", admin::router())
}
