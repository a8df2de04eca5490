//! Handler Tests
//!
//! Calls the axum handlers directly and checks status codes and bodies:
//! - 200/201 success shapes
//! - 400 messages for each validation failure
//! - 404 for unknown ids
//! - 500 for a broken data file

use std::fs;
use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use featureboard::network::{
    create_feature, delete_feature, index, list_features, update_feature, AppState,
};
use featureboard::validate::{CreateFeature, UpdateFeature};
use featureboard::{Feature, FeatureBoard};
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_state() -> (TempDir, AppState) {
    let temp_dir = TempDir::new().unwrap();
    let board = FeatureBoard::open_path(temp_dir.path()).unwrap();
    (temp_dir, Arc::new(board))
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn list(state: &AppState) -> Vec<Feature> {
    let Json(features) = list_features(State(Arc::clone(state))).await.unwrap();
    features
}

async fn post(state: &AppState, body: Value) -> Response {
    let input: CreateFeature = serde_json::from_value(body).unwrap();
    create_feature(State(Arc::clone(state)), Ok(Json(input)))
        .await
        .into_response()
}

async fn put(state: &AppState, id: &str, body: Value) -> Response {
    let input: UpdateFeature = serde_json::from_value(body).unwrap();
    update_feature(State(Arc::clone(state)), Path(id.to_string()), Ok(Json(input)))
        .await
        .into_response()
}

async fn delete(state: &AppState, id: &str) -> Response {
    delete_feature(State(Arc::clone(state)), Path(id.to_string()))
        .await
        .into_response()
}

// =============================================================================
// List Tests
// =============================================================================

#[tokio::test]
async fn test_list_returns_seed() {
    let (_temp, state) = setup_state();

    let response = list_features(State(Arc::clone(&state))).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 4);
    for item in items {
        let keys: Vec<_> = item.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        assert!(item["id"].is_string());
        assert!(item["title"].is_string());
        assert!(item["description"].is_string());
        assert!(item["status"].is_string());
    }
}

#[tokio::test]
async fn test_list_twice_is_identical() {
    let (_temp, state) = setup_state();

    assert_eq!(list(&state).await, list(&state).await);
}

#[tokio::test]
async fn test_list_broken_file_is_internal_error() {
    let (temp, state) = setup_state();
    fs::write(temp.path().join("features.json"), "nope").unwrap();

    let response = list_features(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({"error": "Internal server error"}));
}

// =============================================================================
// Create Tests
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_and_feature() {
    let (_temp, state) = setup_state();

    let response = post(&state, json!({"title": " X ", "description": " y "})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["title"], "X");
    assert_eq!(body["description"], "y");
    assert_eq!(body["status"], "backlog");

    let id = body["id"].as_str().unwrap();
    let features = list(&state).await;
    assert!(features.iter().any(|f| f.id == id && f.title == "X"));
}

#[tokio::test]
async fn test_create_blank_title_is_400() {
    let (_temp, state) = setup_state();

    for body in [json!({"title": ""}), json!({"title": "   "}), json!({})] {
        let response = post(&state, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Title is required"}));
    }
}

// =============================================================================
// Update Tests
// =============================================================================

#[tokio::test]
async fn test_update_returns_updated_feature() {
    let (_temp, state) = setup_state();
    let target = list(&state).await[0].clone();

    let response = put(&state, &target.id, json!({"status": "done"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], target.id.as_str());
    assert_eq!(body["title"], target.title.as_str());
    assert_eq!(body["status"], "done");
}

#[tokio::test]
async fn test_update_error_messages() {
    let (_temp, state) = setup_state();
    let id = list(&state).await[0].id.clone();

    let cases = [
        (json!({}), "No data provided"),
        (json!({"title": "  "}), "Title cannot be empty"),
        (json!({"status": "bogus"}), "Invalid status"),
        (json!({"status": "Done"}), "Invalid status"),
    ];

    for (body, message) in cases {
        let response = put(&state, &id, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": message }));
    }
}

#[tokio::test]
async fn test_update_invalid_status_keeps_stored_feature() {
    let (_temp, state) = setup_state();
    let before = list(&state).await;

    let response = put(&state, &before[0].id, json!({"status": "bogus"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list(&state).await, before);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let (_temp, state) = setup_state();

    let response = put(&state, "missing", json!({"title": "x"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Feature not found"}));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[tokio::test]
async fn test_delete_then_again() {
    let (_temp, state) = setup_state();
    let id = list(&state).await[3].id.clone();

    let response = delete(&state, &id).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"success": true}));

    assert!(list(&state).await.iter().all(|f| f.id != id));

    let response = delete(&state, &id).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Feature not found"}));
}

// =============================================================================
// Index Page Tests
// =============================================================================

#[tokio::test]
async fn test_index_serves_html() {
    let response = index().await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("/api/features"));
}
