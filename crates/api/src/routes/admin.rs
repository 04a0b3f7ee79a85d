//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the admin flag.
pub fn router() -> Router<AppState> {
    Router::new().route("/overview", get(admin::overview))
}
