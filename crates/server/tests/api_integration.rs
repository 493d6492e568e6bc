//! Integration tests for the HTTP API.
//!
//! These drive the real router in-process with `tower::ServiceExt::oneshot`
//! against a stub-embedder state, so every layer except the TCP listener is
//! exercised: routing, JSON extraction, engine calls, and error mapping.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::{build_router, ServerConfig, ServerState};

fn test_router_with_dictionary(dictionary: &str) -> (Router, tempfile::NamedTempFile) {
    let mut file = tempfile::NamedTempFile::new().expect("temp dictionary");
    file.write_all(dictionary.as_bytes()).expect("write dictionary");

    let config = ServerConfig {
        dictionary_path: file.path().to_path_buf(),
        embedder: embedder::EmbedderConfig {
            mode: "stub".into(),
            stub_dimension: 16,
            ..Default::default()
        },
        ..Default::default()
    };

    let state = Arc::new(ServerState::new(config).expect("state"));
    (build_router(state), file)
}

fn test_router() -> Router {
    let config = ServerConfig {
        dictionary_path: "/nonexistent/dictionary.json".into(),
        embedder: embedder::EmbedderConfig {
            mode: "stub".into(),
            stub_dimension: 16,
            ..Default::default()
        },
        ..Default::default()
    };

    let state = Arc::new(ServerState::new(config).expect("state"));
    build_router(state)
}

async fn send_json(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_check_returns_healthy() {
    let (status, body) = send_json(test_router(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "proximity-server");
}

#[tokio::test]
async fn readiness_reports_embedder_mode() {
    let (status, body) = send_json(test_router(), "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"]["embedder"], "stub");
}

#[tokio::test]
async fn api_info_lists_endpoints() {
    let (status, body) = send_json(test_router(), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Proximity Server");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "/api/v1/proximity"));
}

#[tokio::test]
async fn unknown_route_maps_to_404_envelope() {
    let (status, body) = send_json(test_router(), "GET", "/api/v1/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn embed_returns_one_vector_per_text() {
    let (status, body) = send_json(
        test_router(),
        "POST",
        "/api/v1/embed",
        Some(json!({ "texts": ["cola", "cider"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    let embeddings = body["embeddings"].as_array().unwrap();
    assert_eq!(embeddings.len(), 2);
    assert_eq!(embeddings[0].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn embed_empty_texts_is_bad_request() {
    let (status, body) = send_json(
        test_router(),
        "POST",
        "/api/v1/embed",
        Some(json!({ "texts": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn rank_returns_sorted_results() {
    let (status, body) = send_json(
        test_router(),
        "POST",
        "/api/v1/rank",
        Some(json!({
            "query": "fruit",
            "candidates": ["apple", "banana", "car", "train"],
            "top_k": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "fruit");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0]["score"].as_f64().unwrap() >= pair[1]["score"].as_f64().unwrap());
    }
}

#[tokio::test]
async fn rank_empty_query_is_successful_empty_result() {
    let (status, body) = send_json(
        test_router(),
        "POST",
        "/api/v1/rank",
        Some(json!({ "query": "  ", "candidates": ["apple"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn rank_missing_candidates_defaults_to_empty_result() {
    let (status, body) = send_json(
        test_router(),
        "POST",
        "/api/v1/rank",
        Some(json!({ "query": "fruit" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn proximity_excludes_keyword_variants() {
    let (status, body) = send_json(
        test_router(),
        "POST",
        "/api/v1/proximity",
        Some(json!({
            "keyword": "cola",
            "candidates": ["cola", " COLA ", "Co la"],
            "min_score": 0.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keyword"], "cola");
    assert!(body["proximity_words"].as_array().unwrap().is_empty());
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn proximity_words_parallel_scored_results() {
    let (status, body) = send_json(
        test_router(),
        "POST",
        "/api/v1/proximity",
        Some(json!({
            "keyword": "drink",
            "candidates": ["cola", "cider", "juice"],
            "min_score": -1.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let words = body["proximity_words"].as_array().unwrap();
    let results = body["results"].as_array().unwrap();
    assert_eq!(words.len(), results.len());
    for (word, result) in words.iter().zip(results) {
        assert_eq!(word, &result["text"]);
    }
}

#[tokio::test]
async fn proximity_falls_back_to_vocabulary() {
    let (router, _file) = test_router_with_dictionary(
        r#"{
            "P001": { "display_name": "cola", "aliases": ["soda"] },
            "P002": { "display_name": "cider" }
        }"#,
    );

    let (status, body) = send_json(
        router,
        "POST",
        "/api/v1/proximity",
        Some(json!({ "keyword": "cola", "min_score": -1.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let words: Vec<&str> = body["proximity_words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap())
        .collect();
    // The pool came from the dictionary: "cola" itself is excluded and
    // anything that survives the threshold is one of its neighbors.
    assert!(!words.contains(&"cola"));
    for word in &words {
        assert!(["soda", "cider"].contains(word), "unexpected word {word}");
    }
}

#[tokio::test]
async fn vocabulary_endpoint_lists_cached_entries() {
    let (router, _file) = test_router_with_dictionary(
        r#"{
            "P001": { "display_name": "cola", "aliases": ["soda", "pop"] }
        }"#,
    );

    let (status, body) = send_json(router, "GET", "/api/v1/vocabulary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["entries"], json!(["cola", "soda", "pop"]));
}

#[tokio::test]
async fn vocabulary_endpoint_empty_without_dictionary() {
    let (status, body) = send_json(test_router(), "GET", "/api/v1/vocabulary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn response_carries_request_id_header() {
    let router = test_router();
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "test-req-42")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-req-42"
    );
}
