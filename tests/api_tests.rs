//! End-to-end HTTP tests against a bound server with stub providers.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use simquery::embedding::{ClassifierConfig, DenseConfig};
use simquery::engine::{EngineConfig, ScoringEngine, StrategyConfig};
use simquery::gateway::{HandlerState, SimilarityResponse, create_router_with_state};

const GROUND_TRUTH: &str = "Cats are mammals. Dogs are loyal. Fish swim in water.";

struct TestServer {
    addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _ground_truth: NamedTempFile,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn spawn_test_server(strategy: StrategyConfig) -> TestServer {
    let mut ground_truth = NamedTempFile::new().expect("create temp file");
    ground_truth
        .write_all(GROUND_TRUTH.as_bytes())
        .expect("write fixture");

    let engine = ScoringEngine::load(EngineConfig::new(ground_truth.path(), strategy))
        .expect("Should load stub engine");
    let app = create_router_with_state(HandlerState::new(Arc::new(engine)));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(addr).await;

    TestServer {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
        _ground_truth: ground_truth,
    }
}

async fn wait_for_server_ready(addr: SocketAddr) {
    let start = std::time::Instant::now();

    loop {
        assert!(
            start.elapsed() < Duration::from_secs(5),
            "Server failed to start within timeout"
        );

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return,
            Err(_) => tokio::time::sleep(Duration::from_millis(50)).await,
        }
    }
}

#[tokio::test]
async fn test_health_endpoint_round_trip() {
    let server = spawn_test_server(StrategyConfig::Dense(DenseConfig::stub())).await;

    let response = reqwest::get(server.url("/healthz")).await.expect("request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_similarity_round_trip_dense() {
    let server = spawn_test_server(StrategyConfig::Dense(DenseConfig::stub())).await;

    let client = reqwest::Client::new();
    let response = client
        .post(server.url("/get-similarity"))
        .json(&serde_json::json!({ "prompt": "Canines are faithful." }))
        .send()
        .await
        .expect("request");

    assert!(response.status().is_success());
    let body: SimilarityResponse = response.json().await.expect("json body");
    assert!(body.similarity_score.is_finite());
}

#[tokio::test]
async fn test_similarity_round_trip_classifier() {
    let server = spawn_test_server(StrategyConfig::Classifier(ClassifierConfig::stub())).await;

    let client = reqwest::Client::new();
    let response = client
        .post(server.url("/get-similarity"))
        .json(&serde_json::json!({ "prompt": "Dogs are loyal" }))
        .send()
        .await
        .expect("request");

    assert!(response.status().is_success());
    let body: SimilarityResponse = response.json().await.expect("json body");
    assert!((0.0..=1.0).contains(&body.similarity_score));
}

#[tokio::test]
async fn test_empty_prompt_dense_returns_400() {
    let server = spawn_test_server(StrategyConfig::Dense(DenseConfig::stub())).await;

    let client = reqwest::Client::new();
    let response = client
        .post(server.url("/get-similarity"))
        .json(&serde_json::json!({ "prompt": "" }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["code"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_repeated_requests_are_stable() {
    let server = spawn_test_server(StrategyConfig::Dense(DenseConfig::stub())).await;
    let client = reqwest::Client::new();

    let mut scores = Vec::new();
    for _ in 0..3 {
        let response = client
            .post(server.url("/get-similarity"))
            .json(&serde_json::json!({ "prompt": "the same prompt every time" }))
            .send()
            .await
            .expect("request");
        let body: SimilarityResponse = response.json().await.expect("json body");
        scores.push(body.similarity_score);
    }

    assert!(scores.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = spawn_test_server(StrategyConfig::Dense(DenseConfig::stub())).await;
    let client = reqwest::Client::new();
    let base = server.url("/get-similarity");

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        let url = base.clone();
        handles.push(tokio::spawn(async move {
            let response = client
                .post(&url)
                .json(&serde_json::json!({ "prompt": format!("prompt {}", i) }))
                .send()
                .await
                .expect("request");
            assert!(response.status().is_success());
            let body: SimilarityResponse = response.json().await.expect("json body");
            body.similarity_score
        }));
    }

    for handle in handles {
        let score = handle.await.expect("join");
        assert!(score.is_finite());
    }
}

#[tokio::test]
async fn test_server_recovers_after_bad_request() {
    let server = spawn_test_server(StrategyConfig::Dense(DenseConfig::stub())).await;
    let client = reqwest::Client::new();

    let bad = client
        .post(server.url("/get-similarity"))
        .json(&serde_json::json!({ "prompt": "" }))
        .send()
        .await
        .expect("request");
    assert_eq!(bad.status(), reqwest::StatusCode::BAD_REQUEST);

    let good = client
        .post(server.url("/get-similarity"))
        .json(&serde_json::json!({ "prompt": "recovered" }))
        .send()
        .await
        .expect("request");
    assert!(good.status().is_success());
}

#[tokio::test]
async fn test_ready_endpoint_reports_components() {
    let server = spawn_test_server(StrategyConfig::Dense(DenseConfig::stub())).await;

    let response = reqwest::get(server.url("/ready")).await.expect("request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["components"]["strategy"], "dense");
    assert_eq!(body["components"]["provider_mode"], "stub");
    assert_eq!(body["components"]["sentence_count"], 3);
}
