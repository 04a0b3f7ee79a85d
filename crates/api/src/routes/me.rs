//! Route definitions for the `/me` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET /         -> own profile
/// PUT /         -> update profile (email, full name, password)
/// GET /courses  -> authored + enrolled courses
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::me).put(profile::update_me))
        .route("/courses", get(profile::my_courses))
}
