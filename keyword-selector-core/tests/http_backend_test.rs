#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `HttpBackend` against a local axum server speaking the backend's protocol.

mod common;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use common::{air_fryer_analysis, script_response};
use keyword_selector_core::types::{AnalyzeRequest, GenerateRequest};
use keyword_selector_core::{HttpBackend, RequestError, ScriptBackend, SelectionController};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct ServerState {
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn handle_analyze(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.bodies.lock().await.push(body.clone());
    if body["topic"].as_str().unwrap_or_default().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "주제를 입력하세요"})));
    }
    (StatusCode::OK, Json(serde_json::to_value(air_fryer_analysis()).unwrap()))
}

async fn handle_generate(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.bodies.lock().await.push(body);
    Json(serde_json::to_value(script_response("이것만 알면 끝")).unwrap())
}

async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn spawn_backend_server() -> (String, ServerState) {
    let state = ServerState::default();
    let app = Router::new()
        .route("/analyze", post(handle_analyze))
        .route("/generate", post(handle_generate))
        .with_state(state.clone());
    (spawn_server(app).await, state)
}

#[tokio::test]
async fn analyze_decodes_result() {
    let (url, state) = spawn_backend_server().await;
    let backend = HttpBackend::new(url, None).unwrap();

    let result = backend
        .analyze(&AnalyzeRequest {
            topic: "에어프라이어".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result, air_fryer_analysis());
    assert_eq!(state.bodies.lock().await[0], json!({"topic": "에어프라이어"}));
}

#[tokio::test]
async fn generate_posts_indices() {
    let (url, state) = spawn_backend_server().await;
    let backend = HttpBackend::new(format!("{url}/"), None).unwrap();

    let response = backend
        .generate(&GenerateRequest {
            keywords: vec![1],
            title: 0,
        })
        .await
        .unwrap();

    assert_eq!(response.script_data.duration, 20.0);
    assert_eq!(
        state.bodies.lock().await[0],
        json!({"keywords": [1], "title": 0})
    );
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let (url, _state) = spawn_backend_server().await;
    let backend = HttpBackend::new(url, None).unwrap();

    let err = backend
        .analyze(&AnalyzeRequest {
            topic: String::new(),
        })
        .await
        .unwrap_err();

    match err {
        RequestError::Status {
            endpoint,
            status,
            body,
        } => {
            assert_eq!(endpoint, "/analyze");
            assert_eq!(status, 400);
            assert!(body.contains("주제를 입력하세요"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let app = Router::new().route("/generate", post(|| async { "<html>oops</html>" }));
    let url = spawn_server(app).await;
    let backend = HttpBackend::new(url, None).unwrap();

    let err = backend
        .generate(&GenerateRequest {
            keywords: vec![0],
            title: 0,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Parse { ref endpoint, .. } if endpoint == "/generate"));
}

#[tokio::test]
async fn unreachable_host_maps_to_network_error() {
    // 绑定后立即释放端口，保证无人监听
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(format!("http://{addr}"), None).unwrap();
    let err = backend
        .analyze(&AnalyzeRequest {
            topic: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Network { .. }));
}

#[tokio::test]
async fn controller_over_http() {
    let (url, state) = spawn_backend_server().await;
    let backend = HttpBackend::new(url, None).unwrap();
    let mut controller = SelectionController::new();

    controller.analyze_with(&backend, "에어프라이어").await.unwrap();
    controller.toggle_keyword(1).unwrap();
    controller.select_title(0).unwrap();
    controller.generate_with(&backend).await.unwrap();

    let bodies = state.bodies.lock().await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[1], json!({"keywords": [1], "title": 0}));
}
