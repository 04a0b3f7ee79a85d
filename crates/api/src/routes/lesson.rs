//! Route definitions for the `/lessons` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::lesson;
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// POST /{id}/delete -> delete a lesson (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/delete", post(lesson::delete))
}
