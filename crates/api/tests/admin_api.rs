//! HTTP-level integration tests for the admin overview and profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

use coursehub_api::auth::password::hash_password;
use coursehub_db::models::user::CreateUser;
use coursehub_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register and log in a regular user, returning the access token.
async fn signup(pool: &PgPool, username: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": "admin-test-pw-1",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    login(pool, username, "admin-test-pw-1").await
}

async fn login(pool: &PgPool, username: &str, password: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Create an admin account directly in the database and log it in.
async fn signup_admin(pool: &PgPool, username: &str) -> String {
    let password = "admin-test-pw-1";
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(password).expect("hashing should succeed"),
        full_name: None,
        is_admin: true,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    login(pool, username, password).await
}

// ---------------------------------------------------------------------------
// Admin overview
// ---------------------------------------------------------------------------

/// The overview requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_overview_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/overview").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A regular user is forbidden from the overview.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_overview_requires_admin(pool: PgPool) {
    let token = signup(&pool, "pleb").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/overview", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// An admin sees every user, course, and enrollment, with no password hashes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_overview_aggregates_platform(pool: PgPool) {
    let admin = signup_admin(&pool, "boss").await;
    let author = signup(&pool, "author").await;
    let student = signup(&pool, "student").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Seen by admin", "description": "d" });
    let response = post_json_auth(app, "/api/v1/courses", body, &author).await;
    let course_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/courses/{course_id}/enroll"),
        serde_json::json!({}),
        &student,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/overview", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["users"].as_array().unwrap().len(), 3);
    assert_eq!(json["courses"].as_array().unwrap().len(), 1);
    assert_eq!(json["enrollments"].as_array().unwrap().len(), 1);
    assert!(
        json["users"]
            .as_array()
            .unwrap()
            .iter()
            .all(|u| u.get("password_hash").is_none()),
        "the overview must not leak password hashes"
    );
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /me returns the caller's own public profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_own_profile(pool: PgPool) {
    let token = signup(&pool, "selfie").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["username"], "selfie");
    assert!(json.get("password_hash").is_none());
}

/// PUT /me updates only the provided fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_me_partial(pool: PgPool) {
    let token = signup(&pool, "updater").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "full_name": "Up Dater" });
    let response = put_json_auth(app, "/api/v1/me", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["full_name"], "Up Dater");
    assert_eq!(json["email"], "updater@test.com", "email must be untouched");
}

/// Changing email to one owned by another account is a 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_me_email_conflict(pool: PgPool) {
    signup(&pool, "first").await;
    let token = signup(&pool, "second").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "first@test.com" });
    let response = put_json_auth(app, "/api/v1/me", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Changing the password through PUT /me makes the new password work and
/// the old one fail.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_me_password_change(pool: PgPool) {
    let token = signup(&pool, "rotator").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "password": "brand-new-password" });
    let response = put_json_auth(app, "/api/v1/me", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "rotator", "password": "admin-test-pw-1" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    login(&pool, "rotator", "brand-new-password").await;
}

/// GET /me/courses splits authored courses from enrollments.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_my_courses_dashboard(pool: PgPool) {
    let author = signup(&pool, "author").await;
    let student = signup(&pool, "student").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Authored", "description": "d" });
    let response = post_json_auth(app, "/api/v1/courses", body, &author).await;
    let course_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/courses/{course_id}/enroll"),
        serde_json::json!({}),
        &student,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The author sees one created course and no enrollments.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/me/courses", &author).await;
    let json = body_json(response).await;
    assert_eq!(json["created"].as_array().unwrap().len(), 1);
    assert_eq!(json["enrolled"].as_array().unwrap().len(), 0);

    // The student sees the reverse, with the course joined in.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/me/courses", &student).await;
    let json = body_json(response).await;
    assert_eq!(json["created"].as_array().unwrap().len(), 0);
    let enrolled = json["enrolled"].as_array().unwrap();
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0]["course"]["title"], "Authored");
}
