//! Integration tests for course/lesson repository operations:
//! lesson batch creation, cross-course edit guarding, cascade deletion.

mod common;

use sqlx::PgPool;

use common::{create_course, create_user, new_course, new_lesson};
use coursehub_db::models::course::{LessonEdit, UpdateCourse};
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, LessonRepo};

/// Blank-titled lesson entries are skipped; order_index is the position in
/// the submitted list, so surviving entries keep their original positions.
#[sqlx::test]
async fn test_create_skips_blank_lessons_and_keeps_positions(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;

    let input = new_course(
        "Rust Basics",
        vec![new_lesson("Intro"), new_lesson("   "), new_lesson("Ownership")],
    );
    let course = CourseRepo::create_with_lessons(&pool, instructor.id, &input)
        .await
        .expect("creation should succeed");

    let lessons = LessonRepo::list_by_course(&pool, course.id)
        .await
        .expect("listing should succeed");

    assert_eq!(lessons.len(), 2, "blank-titled entry must be skipped");
    assert_eq!(lessons[0].title, "Intro");
    assert_eq!(lessons[0].order_index, 0);
    assert_eq!(lessons[1].title, "Ownership");
    assert_eq!(lessons[1].order_index, 2, "skipped entry leaves a gap");
}

/// A lesson edit keyed by a lesson belonging to a different course is a no-op.
#[sqlx::test]
async fn test_update_ignores_foreign_lessons(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;

    let course_a = CourseRepo::create_with_lessons(
        &pool,
        instructor.id,
        &new_course("Course A", vec![new_lesson("A1")]),
    )
    .await
    .expect("creation should succeed");
    let course_b = CourseRepo::create_with_lessons(
        &pool,
        instructor.id,
        &new_course("Course B", vec![new_lesson("B1")]),
    )
    .await
    .expect("creation should succeed");

    let foreign_lesson = LessonRepo::list_by_course(&pool, course_b.id).await.unwrap()[0].clone();

    let update = UpdateCourse {
        title: "Course A v2".to_string(),
        description: "updated".to_string(),
        category_id: None,
        price: 10.0,
        duration_hours: Some(4),
        difficulty_level: course_a.difficulty_level,
        image_url: None,
        lessons: vec![LessonEdit {
            id: foreign_lesson.id,
            title: "hijacked".to_string(),
            content: "hijacked".to_string(),
            video_url: None,
            duration_minutes: None,
        }],
    };

    let updated = CourseRepo::update_with_lessons(&pool, course_a.id, &update)
        .await
        .expect("update should succeed")
        .expect("course exists");
    assert_eq!(updated.title, "Course A v2");

    let untouched = LessonRepo::find_by_id(&pool, foreign_lesson.id)
        .await
        .unwrap()
        .expect("lesson still exists");
    assert_eq!(untouched.title, "B1", "lesson of another course must not change");
}

/// Field updates apply unconditionally and bump updated_at.
#[sqlx::test]
async fn test_update_applies_fields(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;
    let course = create_course(&pool, instructor.id, "Old Title").await;

    let update = UpdateCourse {
        title: "New Title".to_string(),
        description: "new description".to_string(),
        category_id: None,
        price: 29.99,
        duration_hours: Some(8),
        difficulty_level: coursehub_db::models::course::DifficultyLevel::Advanced,
        image_url: Some("img.png".to_string()),
        lessons: vec![],
    };
    let updated = CourseRepo::update_with_lessons(&pool, course.id, &update)
        .await
        .expect("update should succeed")
        .expect("course exists");

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.price, 29.99);
    assert_eq!(updated.duration_hours, Some(8));
    assert!(updated.updated_at >= course.updated_at);
}

/// Updating a nonexistent course returns None.
#[sqlx::test]
async fn test_update_missing_course_returns_none(pool: PgPool) {
    let update = UpdateCourse {
        title: "x".to_string(),
        description: "x".to_string(),
        category_id: None,
        price: 0.0,
        duration_hours: None,
        difficulty_level: coursehub_db::models::course::DifficultyLevel::Beginner,
        image_url: None,
        lessons: vec![],
    };
    let result = CourseRepo::update_with_lessons(&pool, 9999, &update)
        .await
        .expect("update should succeed");
    assert!(result.is_none());
}

/// Deleting a course removes its lessons and enrollments; no orphans remain.
#[sqlx::test]
async fn test_delete_cascades_to_lessons_and_enrollments(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;
    let student = create_user(&pool, "student").await;

    let course = CourseRepo::create_with_lessons(
        &pool,
        instructor.id,
        &new_course("Doomed", vec![new_lesson("L1"), new_lesson("L2")]),
    )
    .await
    .expect("creation should succeed");
    EnrollmentRepo::create(&pool, student.id, course.id)
        .await
        .expect("enrollment should succeed");

    let deleted = CourseRepo::delete(&pool, course.id)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    let lessons = LessonRepo::count_by_course(&pool, course.id).await.unwrap();
    assert_eq!(lessons, 0, "no orphan lessons");

    let enrollments = EnrollmentRepo::list_by_course(&pool, course.id).await.unwrap();
    assert!(enrollments.is_empty(), "no orphan enrollments");

    assert!(CourseRepo::find_by_id(&pool, course.id).await.unwrap().is_none());
}
