//! Test helpers for Web API integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use plank::web::handlers::AppState;
use plank::web::middleware::JwtState;
use plank::web::router::create_router;
use plank::Database;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only";

/// Create a test server backed by an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone(), TEST_JWT_SECRET, 900));
    let jwt_state = Arc::new(JwtState::new(TEST_JWT_SECRET));
    let router = create_router(app_state, jwt_state, &[]);

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, db)
}

/// Register a user and return the id from the response body.
pub async fn register_user(server: &TestServer, username: &str) -> i64 {
    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": format!("{username}@example.com"),
            "username": username,
            "full_name": format!("{username} full"),
            "password": "password123"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("registration response has an id")
}

/// Log a registered user in and return the bearer token.
pub async fn login_user(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/auth/jwt/login")
        .json(&json!({
            "username": username,
            "password": "password123"
        }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["access_token"]
        .as_str()
        .expect("login response has an access_token")
        .to_string()
}

/// Register and log in, returning the bearer token.
pub async fn register_and_login(server: &TestServer, username: &str) -> String {
    register_user(server, username).await;
    login_user(server, username).await
}
