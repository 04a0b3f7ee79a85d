//! Shared helpers for db integration tests.

use sqlx::PgPool;

use coursehub_db::models::course::{Course, CreateCourse, DifficultyLevel, NewLesson};
use coursehub_db::models::user::{CreateUser, User};
use coursehub_db::repositories::{CourseRepo, UserRepo};

/// Insert a user directly. Password hash is a placeholder; db tests never log in.
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "x".to_string(),
        full_name: Some(format!("{username} Test")),
        is_admin: false,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

pub fn new_lesson(title: &str) -> NewLesson {
    NewLesson {
        title: title.to_string(),
        content: format!("Content for {title}"),
        video_url: None,
        duration_minutes: None,
    }
}

pub fn new_course(title: &str, lessons: Vec<NewLesson>) -> CreateCourse {
    CreateCourse {
        title: title.to_string(),
        description: format!("About {title}"),
        category_id: None,
        price: 0.0,
        duration_hours: None,
        difficulty_level: DifficultyLevel::Beginner,
        image_url: None,
        lessons,
    }
}

pub async fn create_course(pool: &PgPool, instructor_id: i64, title: &str) -> Course {
    CourseRepo::create_with_lessons(pool, instructor_id, &new_course(title, vec![]))
        .await
        .expect("course creation should succeed")
}
