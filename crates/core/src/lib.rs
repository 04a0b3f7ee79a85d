//! Domain-level building blocks shared by the db and api crates.
//!
//! Holds the error taxonomy, primitive type aliases, and the lenient
//! form-input coercion helpers. No I/O happens here.

pub mod error;
pub mod lenient;
pub mod types;
