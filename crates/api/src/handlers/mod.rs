//! HTTP handlers, one module per resource.
//!
//! Handlers are the operation boundary: authenticate (via extractor), look
//! the target up, check ownership against the persisted row, then read/write
//! through the repositories. Domain failures become [`AppError`](crate::error::AppError)
//! values, never panics.

pub mod admin;
pub mod auth;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod profile;
