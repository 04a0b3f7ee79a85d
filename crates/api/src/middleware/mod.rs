//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::OptionalAuthUser`] -- Like `AuthUser`, but anonymous requests pass.
//! - [`admin::RequireAdmin`] -- Requires the admin flag.

pub mod admin;
pub mod auth;
