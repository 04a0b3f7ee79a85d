//! Integration tests for the enrollment invariant and progress tracking.

mod common;

use sqlx::PgPool;

use common::{create_course, create_user, new_course, new_lesson};
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, LessonProgressRepo, LessonRepo};

/// The unique constraint rejects a second enrollment row for the same
/// (user, course), closing the race past the application-level check.
#[sqlx::test]
async fn test_duplicate_enrollment_rejected_by_constraint(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;
    let student = create_user(&pool, "student").await;
    let course = create_course(&pool, instructor.id, "Intro").await;

    EnrollmentRepo::create(&pool, student.id, course.id)
        .await
        .expect("first enrollment should succeed");

    let second = EnrollmentRepo::create(&pool, student.id, course.id).await;
    let err = second.expect_err("second enrollment must be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(
                db_err.constraint(),
                Some("uq_enrollments_user_course"),
                "rejection must come from the enrollment uniqueness constraint"
            );
        }
        other => panic!("expected a database error, got {other:?}"),
    }

    let rows = EnrollmentRepo::list_by_course(&pool, course.id).await.unwrap();
    assert_eq!(rows.len(), 1, "exactly one enrollment row for (user, course)");
}

/// A fresh enrollment starts at zero progress with no completion time.
#[sqlx::test]
async fn test_new_enrollment_has_zero_progress(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;
    let student = create_user(&pool, "student").await;
    let course = create_course(&pool, instructor.id, "Intro").await;

    let enrollment = EnrollmentRepo::create(&pool, student.id, course.id)
        .await
        .expect("enrollment should succeed");

    assert_eq!(enrollment.progress_percent, 0);
    assert!(enrollment.completed_at.is_none());
}

/// find_by_user_and_course returns None when no enrollment exists.
#[sqlx::test]
async fn test_missing_enrollment_is_none(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;
    let student = create_user(&pool, "student").await;
    let course = create_course(&pool, instructor.id, "Intro").await;

    let found = EnrollmentRepo::find_by_user_and_course(&pool, student.id, course.id)
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

/// Completing lessons one by one walks progress to 100% and stamps
/// completed_at; re-marking a lesson is idempotent.
#[sqlx::test]
async fn test_lesson_completion_drives_progress(pool: PgPool) {
    let instructor = create_user(&pool, "author").await;
    let student = create_user(&pool, "student").await;

    let course = CourseRepo::create_with_lessons(
        &pool,
        instructor.id,
        &new_course("Two Parter", vec![new_lesson("L1"), new_lesson("L2")]),
    )
    .await
    .expect("creation should succeed");
    let lessons = LessonRepo::list_by_course(&pool, course.id).await.unwrap();

    let enrollment = EnrollmentRepo::create(&pool, student.id, course.id)
        .await
        .expect("enrollment should succeed");

    let after_first = LessonProgressRepo::mark_completed(&pool, enrollment.id, lessons[0].id)
        .await
        .expect("marking should succeed");
    assert_eq!(after_first.progress_percent, 50);
    assert!(after_first.completed_at.is_none());

    let after_second = LessonProgressRepo::mark_completed(&pool, enrollment.id, lessons[1].id)
        .await
        .expect("marking should succeed");
    assert_eq!(after_second.progress_percent, 100);
    assert!(after_second.completed_at.is_some());

    // Re-marking must not create a second record or move the clock back.
    let again = LessonProgressRepo::mark_completed(&pool, enrollment.id, lessons[0].id)
        .await
        .expect("re-marking should succeed");
    assert_eq!(again.progress_percent, 100);
    assert_eq!(again.completed_at, after_second.completed_at);

    let records = LessonProgressRepo::list_by_enrollment(&pool, enrollment.id)
        .await
        .unwrap();
    assert_eq!(records.len(), 2, "one record per lesson, upserted");
}
