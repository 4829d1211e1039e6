//! Handler tests for the users domain: registration and login over the
//! in-memory repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ErrorResponse, JwtAuth, JwtConfig};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "handler-test-secret-of-32-characters";

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn jwt() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new(SECRET, 60).unwrap())
}

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new(), jwt()))
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn alice() -> Value {
    json!({"name": "Alice", "email": "alice@example.com", "password": "123456"})
}

#[tokio::test]
async fn test_create_user_returns_201_without_hash() {
    let response = app().oneshot(post("/", alice())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_validation_is_400() {
    let cases = [
        (json!({"email": "a@b.c", "password": "x"}), "name is required"),
        (json!({"name": "A", "password": "x"}), "email is required"),
        (json!({"name": "A", "email": "a@b.c"}), "password is required"),
    ];

    for (body, message) in cases {
        let response = app().oneshot(post("/", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(error.message, message);
    }
}

#[tokio::test]
async fn test_long_fields_are_accepted_and_long_login_is_401() {
    let app = app();
    let email = format!("{}@example.com", "a".repeat(300));
    let password = "p".repeat(200);

    let response = app
        .clone()
        .oneshot(post(
            "/",
            json!({"name": "n".repeat(150), "email": email, "password": password}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post("/auth", json!({"email": email, "password": password})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post(
            "/auth",
            json!({"email": email, "password": "q".repeat(500)}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_user_duplicate_email_is_409() {
    let app = app();

    let first = app.clone().oneshot(post("/", alice())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post("/", alice())).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_returns_token_for_user() {
    let app = app();

    let response = app.clone().oneshot(post("/", alice())).await.unwrap();
    let user: UserResponse = json_body(response.into_body()).await;

    let response = app
        .oneshot(post(
            "/auth",
            json!({"email": "alice@example.com", "password": "123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let token: AccessToken = json_body(response.into_body()).await;
    let claims = jwt().verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable_401s() {
    let app = app();
    app.clone().oneshot(post("/", alice())).await.unwrap();

    let wrong_password = app
        .clone()
        .oneshot(post(
            "/auth",
            json!({"email": "alice@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    let unknown_email = app
        .oneshot(post(
            "/auth",
            json!({"email": "nobody@example.com", "password": "123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let a: ErrorResponse = json_body(wrong_password.into_body()).await;
    let b: ErrorResponse = json_body(unknown_email.into_body()).await;
    assert_eq!(a.message, b.message);
}

#[tokio::test]
async fn test_login_malformed_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/auth")
        .header("content-type", "application/json")
        .body(Body::from("email=alice"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
