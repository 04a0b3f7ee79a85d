//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for edits, where the entity is mutable

pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod lesson_progress;
pub mod session;
pub mod user;
