//! Web API Board Tests
//!
//! Integration tests for the board endpoints.

use agora::web::handlers::AppState;
use agora::web::router::{create_health_router, create_router};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test server with a freshly seeded store.
fn create_test_server() -> TestServer {
    let app_state = Arc::new(AppState::seeded());
    let router = create_router(app_state, &[]).merge(create_health_router());
    TestServer::new(router).expect("Failed to create test server")
}

// ============================================================================
// List Boards Tests
// ============================================================================

#[tokio::test]
async fn test_list_boards_returns_seeded_catalog() {
    let server = create_test_server();

    let response = server.get("/api/boards").await;

    response.assert_status_ok();

    let boards: Vec<Value> = response.json();
    assert_eq!(boards.len(), 6);

    let slugs: Vec<&str> = boards.iter().map(|b| b["slug"].as_str().unwrap()).collect();
    assert_eq!(
        slugs,
        [
            "philosophy",
            "analysis",
            "observation",
            "automation",
            "fiction",
            "lab"
        ]
    );
}

#[tokio::test]
async fn test_list_boards_tiers() {
    let server = create_test_server();

    let boards: Vec<Value> = server.get("/api/boards").await.json();

    assert_eq!(boards[0]["tier"], "MAIN");
    assert_eq!(boards[1]["tier"], "MAIN");
    assert_eq!(boards[2]["tier"], "NORMAL");
    assert_eq!(boards[3]["tier"], "NORMAL");
    assert_eq!(boards[4]["tier"], "NORMAL");
    assert_eq!(boards[5]["tier"], "LAB");
}

#[tokio::test]
async fn test_list_boards_unchanged_by_writes() {
    let server = create_test_server();

    server
        .post("/api/posts")
        .json(&json!({
            "board": "lab",
            "agent": "agent-writer",
            "title": "A new experiment",
            "body": "Notes."
        }))
        .await
        .assert_status_ok();

    let boards: Vec<Value> = server.get("/api/boards").await.json();
    assert_eq!(boards.len(), 6);
    assert_eq!(boards[0]["slug"], "philosophy");
}

// ============================================================================
// List Board Posts Tests
// ============================================================================

#[tokio::test]
async fn test_list_board_posts_seed() {
    let server = create_test_server();

    let response = server.get("/api/boards/philosophy/posts").await;

    response.assert_status_ok();

    let posts: Vec<Value> = response.json();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], 101);
    assert_eq!(posts[0]["agent"], "agent-cynic");
    assert_eq!(posts[0]["comment_count"], 1);
}

#[tokio::test]
async fn test_list_board_posts_unknown_slug_is_empty() {
    let server = create_test_server();

    let response = server.get("/api/boards/nonexistent/posts").await;

    // Deliberately lenient: unknown slugs answer 200 with an empty array.
    response.assert_status_ok();

    let posts: Vec<Value> = response.json();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_list_board_posts_newest_first() {
    let server = create_test_server();

    server
        .post("/api/posts")
        .json(&json!({
            "board": "philosophy",
            "agent": "agent-a",
            "title": "Older post",
            "body": "First."
        }))
        .await
        .assert_status_ok();

    server
        .post("/api/posts")
        .json(&json!({
            "board": "philosophy",
            "agent": "agent-b",
            "title": "Newer post",
            "body": "Second."
        }))
        .await
        .assert_status_ok();

    let posts: Vec<Value> = server.get("/api/boards/philosophy/posts").await.json();

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"], "Newer post");
    assert_eq!(posts[1]["title"], "Older post");
    assert_eq!(posts[2]["id"], 101); // seed post last
}

#[tokio::test]
async fn test_list_board_posts_does_not_leak_other_boards() {
    let server = create_test_server();

    server
        .post("/api/posts")
        .json(&json!({
            "board": "lab",
            "agent": "agent-a",
            "title": "Lab only",
            "body": "Body."
        }))
        .await
        .assert_status_ok();

    let posts: Vec<Value> = server.get("/api/boards/analysis/posts").await.json();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], 201);
}
