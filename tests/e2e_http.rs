// tests/e2e_http.rs
use axum::body::{Body, to_bytes};
use axum::http::{
    Request, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::{Value, json};
use tinta_core::domain::user::Role;
use tower::util::ServiceExt as _;

mod support;
use support::TestHarness;

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let harness = TestHarness::new();
    let response = harness
        .router()
        .oneshot(get_request("/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn login_then_create_and_read_a_post() {
    let harness = TestHarness::new();
    harness
        .seed_user("ada@example.com", Role::Blogger, "backend", false)
        .await;

    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            None,
            json!({"email": "ada@example.com", "password": "secret"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let login = body_json(response).await;
    let token = login["token"]["token"].as_str().unwrap().to_owned();
    assert_eq!(login["user"]["email"], "ada@example.com");

    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/posts",
            Some(&token),
            json!({"title": "Hello", "content": "First post.", "read_permission": "public"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["read_permission"], "public");
    assert_eq!(created["edit_permission"], "owner");

    // Public read permission makes it visible without a token.
    let response = harness
        .router()
        .oneshot(get_request("/api/v1/posts", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["total_count"], 1);
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["results"][0]["title"], "Hello");
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let harness = TestHarness::new();
    harness
        .seed_user("ada@example.com", Role::Blogger, "backend", false)
        .await;

    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            None,
            json!({"email": "ada@example.com", "password": "nope"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn writes_without_a_token_return_401() {
    let harness = TestHarness::new();
    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/posts",
            None,
            json!({"title": "t", "content": "c"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn a_tampered_token_returns_401_even_on_public_reads() {
    let harness = TestHarness::new();
    let response = harness
        .router()
        .oneshot(get_request("/api/v1/posts", Some("not-a-token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn validation_failures_list_every_error() {
    let harness = TestHarness::new();
    let user = harness
        .seed_user("ada@example.com", Role::Blogger, "backend", false)
        .await;
    let token = harness.token_for(&user).await;

    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/posts",
            Some(&token),
            json!({"title": "", "content": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["errors"],
        json!(["Post must have a title.", "Post must have content."])
    );
}

#[tokio::test]
async fn unknown_post_returns_404() {
    let harness = TestHarness::new();
    let response = harness
        .router()
        .oneshot(get_request("/api/v1/posts/999", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comment_delete_requires_the_comment_id_query_param() {
    let harness = TestHarness::new();
    let user = harness
        .seed_user("ada@example.com", Role::Blogger, "backend", false)
        .await;
    let token = harness.token_for(&user).await;

    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/posts",
            Some(&token),
            json!({"title": "Discussed", "content": "body", "read_permission": "public"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/posts/{post_id}/comments"))
        .header(AUTHORIZATION, bearer(&token))
        .body(Body::empty())
        .unwrap();
    let response = harness.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "No query param in the URL (comment_id).");
}

#[tokio::test]
async fn user_management_requires_a_superuser_token() {
    let harness = TestHarness::new();
    let user = harness
        .seed_user("admin@example.com", Role::Admin, "", false)
        .await;
    let token = harness.token_for(&user).await;

    let response = harness
        .router()
        .oneshot(get_request("/api/v1/users", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let root = harness
        .seed_user("root@example.com", Role::Admin, "", true)
        .await;
    let root_token = harness.token_for(&root).await;

    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            Some(&root_token),
            json!({"email": "new@example.com", "password": "pw", "team": "backend"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["role"], "blogger");
    assert_eq!(created["team"], "backend");
}

#[tokio::test]
async fn like_toggle_roundtrip_over_http() {
    let harness = TestHarness::new();
    let user = harness
        .seed_user("ada@example.com", Role::Blogger, "backend", false)
        .await;
    let token = harness.token_for(&user).await;

    let response = harness
        .router()
        .oneshot(json_request(
            "POST",
            "/api/v1/posts",
            Some(&token),
            json!({"title": "Likable", "content": "body", "read_permission": "public"}),
        ))
        .await
        .unwrap();
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    let like_uri = format!("/api/v1/posts/{post_id}/like");
    let response = harness
        .router()
        .oneshot(json_request("POST", &like_uri, Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["is_active"], true);

    let response = harness
        .router()
        .oneshot(json_request("POST", &like_uri, Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["is_active"], false);

    let response = harness
        .router()
        .oneshot(get_request(&format!("/api/v1/posts/{post_id}/likes"), None))
        .await
        .unwrap();
    let page = body_json(response).await;
    assert_eq!(page["total_count"], 0);
}
