//! Route definitions for the `/courses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{course, enrollment};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                                        -> list published
/// POST   /                                        -> create (auth)
/// GET    /featured                                -> random published sample
/// GET    /{id}                                    -> detail with lessons
/// PUT    /{id}                                    -> update (owner)
/// DELETE /{id}                                    -> delete (owner)
/// POST   /{id}/enroll                             -> enroll (auth)
/// GET    /{id}/progress                           -> caller's progress (auth)
/// POST   /{course_id}/lessons/{lesson_id}/complete -> mark lesson done (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list).post(course::create))
        .route("/featured", get(course::featured))
        .route(
            "/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .route("/{id}/enroll", post(enrollment::enroll))
        .route("/{id}/progress", get(enrollment::progress))
        .route(
            "/{course_id}/lessons/{lesson_id}/complete",
            post(enrollment::complete_lesson),
        )
}
