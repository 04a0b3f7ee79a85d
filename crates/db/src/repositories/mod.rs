//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-row writes open an
//! internal transaction so callers get commit-or-rollback atomicity.

pub mod category_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod lesson_progress_repo;
pub mod lesson_repo;
pub mod session_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_progress_repo::LessonProgressRepo;
pub use lesson_repo::LessonRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
