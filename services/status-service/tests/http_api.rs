//! Route-level tests driving the router in memory.

use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::Response;
use status_service::application::config::Config;
use status_service::application::context::create_application_state;
use status_service::http::http_server::HttpServer;
use tokio::task::JoinSet;
use tower::ServiceExt;

fn setup() -> axum::Router {
    HttpServer::router(create_application_state(Config::default()))
}

async fn get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_welcome() {
    let app = setup();

    for _ in 0..3 {
        let response = get(app.clone(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("application/json"));

        let json = body_json(response).await;
        assert_eq!(json["message"], "Welcome to My Java App!");
        assert_eq!(json["status"], "running");
        assert_eq!(json["version"], "2.0.0");
    }
}

#[tokio::test]
async fn test_health_is_plain_up() {
    let response = get(setup(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/plain"));
    assert_eq!(body_bytes(response).await, b"UP");
}

#[tokio::test]
async fn test_actuator_health() {
    let response = get(setup(), "/actuator/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, br#"{"status":"UP"}"#);
}

#[tokio::test]
async fn test_users() {
    let response = get(setup(), "/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["users"].as_array().unwrap();
    assert_eq!(users, &["user1", "user2", "user3"]);
    assert_eq!(json["count"], users.len());
}

#[tokio::test]
async fn test_hello() {
    let response = get(setup(), "/api/hello").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/plain"));
    assert_eq!(
        body_bytes(response).await,
        b"Hello, CI/CD World! This is a Spring Boot Web Application."
    );
}

#[tokio::test]
async fn test_status_timestamp_never_decreases() {
    let app = setup();

    let mut previous = 0;
    for _ in 0..20 {
        let response = get(app.clone(), "/api/status").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["uptime"], "running");

        let timestamp = json["timestamp"].as_i64().unwrap();
        assert!(timestamp > 0);
        assert!(timestamp >= previous);
        previous = timestamp;
    }
}

#[tokio::test]
async fn test_web_status() {
    let response = get(setup(), "/api/web-status").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "running");
    assert_eq!(json["application"], "my-java-app");
    assert_eq!(json["version"], "2.0.0");
    assert_eq!(json["deployed_to"], "Nexus Repository");
    assert_eq!(json["timestamp"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn test_home_page() {
    let response = get(setup(), "/home").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let page = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(page.contains("My Java Web App"));
    assert!(page.contains("Version: 2.0.0"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = get(setup(), "/api/unknown").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response).await, b"Unexpected route");
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let response = setup()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_independent() {
    const REQUESTS: usize = 64;

    let app = setup();
    let mut requests = JoinSet::new();

    for i in 0..REQUESTS {
        let app = app.clone();
        requests.spawn(async move {
            if i % 2 == 0 {
                let json = body_json(get(app, "/api/users").await).await;
                assert_eq!(json["count"], 3);
                assert_eq!(json["users"][0], "user1");
            } else {
                let response = get(app, "/health").await;
                assert_eq!(response.status(), StatusCode::OK);
                assert_eq!(body_bytes(response).await, b"UP");
            }
        });
    }

    let mut completed = 0;
    while let Some(result) = requests.join_next().await {
        result.unwrap();
        completed += 1;
    }
    assert_eq!(completed, REQUESTS);
}
