#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use quiz_api::{
    create_router,
    models::Question,
    services::{question_bank::QuestionBank, AppState},
    Config,
};

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        question_bank_path: None,
    }
}

/// App backed by the embedded default question bank.
pub fn create_test_app() -> Router {
    init_tracing();
    let app_state = Arc::new(AppState::new(test_config()).expect("Failed to build test app state"));
    create_router(app_state)
}

/// App backed by a deterministic bank. Lets tests submit known-correct and
/// known-wrong answers.
pub fn create_test_app_with_questions(questions: Vec<Question>) -> Router {
    init_tracing();
    let bank = QuestionBank::new(questions).expect("Invalid test question bank");
    let app_state = Arc::new(AppState::with_bank(test_config(), bank));
    create_router(app_state)
}

/// Questions whose correct option is always index 1.
pub fn fixed_questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| Question {
            text: format!("Question {}?", i + 1),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_index: 1,
            category: "Testing".to_string(),
        })
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    split_response(response).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    split_response(response).await
}

async fn split_response(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "non-JSON response body (status {}): {}",
            status,
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}
