//! SQLite-backed API Tests
//!
//! Same router as production, on a seeded on-disk SQLite database.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use trivia::http_server::{HttpServer, ServerConfig};
use trivia::store::seed::{seed_if_empty, DEFAULT_CATEGORIES};
use trivia::store::{QuestionStore, SqliteStore};

async fn setup() -> (TempDir, Arc<SqliteStore>, Router) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("trivia.db").display());
    let store = Arc::new(SqliteStore::connect(&url).await.unwrap());
    seed_if_empty(store.as_ref()).await.unwrap();

    let config = ServerConfig {
        database_url: url,
        ..ServerConfig::default()
    };
    let router = HttpServer::new(config, store.clone()).router();
    (dir, store, router)
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_seeded_categories() {
    let (_dir, _store, router) = setup().await;
    let (status, body) = send(&router, Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_categories"], DEFAULT_CATEGORIES.len());
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
}

#[tokio::test]
async fn test_create_then_delete() {
    let (_dir, store, router) = setup().await;
    let before = store.questions().await.unwrap().len();

    let (status, created) = send(
        &router,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "category": "1",
            "difficulty": "2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["total_questions"], before + 1);
    let id = created["id"].as_i64().unwrap();

    let (_, listing) = send(&router, Method::GET, "/questions?page=2", None).await;
    assert_eq!(listing["total_questions"], before + 1);

    let path = format!("/questions/{id}");
    let (status, deleted) = send(&router, Method::DELETE, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["delete"], id.to_string());

    let (status, _) = send(&router, Method::DELETE, &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.questions().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_create_with_unknown_category_rolls_back() {
    let (_dir, store, router) = setup().await;
    let before = store.questions().await.unwrap().len();

    let (status, body) = send(
        &router,
        Method::POST,
        "/questions",
        Some(json!({"question": "Q?", "answer": "A", "category": 77, "difficulty": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);
    assert_eq!(store.questions().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_search_seeded_questions() {
    let (_dir, _store, router) = setup().await;
    let (status, body) = send(
        &router,
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": "WORLD CUP"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 2);
}

#[tokio::test]
async fn test_quiz_exhausts_category() {
    let (_dir, store, router) = setup().await;
    let in_category = store.questions_in_category(2).await.unwrap().len();
    let mut previous: Vec<i64> = Vec::new();

    for _ in 0..in_category {
        let (status, body) = send(
            &router,
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": previous, "quiz_category": {"id": 2}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let question = &body["question"];
        assert_eq!(question["category"], 2);
        let id = question["id"].as_i64().unwrap();
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let (_, body) = send(
        &router,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": previous, "quiz_category": {"id": 2}})),
    )
    .await;
    assert_eq!(body, json!({"success": true}));
}
