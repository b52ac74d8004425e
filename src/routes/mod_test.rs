use super::*;
use std::time::Duration;

use axum::Json;
use serde_json::json;

use crate::config::HostConfig;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn host_for(backend_url: String) -> String {
    let state = AppState::new(HostConfig { port: 0, backend_url, backend_timeout: Duration::from_secs(5) }).unwrap();
    serve(backend_routes(state)).await
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = host_for("http://127.0.0.1:9".into()).await;
    let response = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_paths_reach_the_backend() {
    let backend = serve(Router::new().route(
        "/api/projects",
        get(|| async { Json(json!([{ "id": "p1", "name": "Mug", "images": ["a.jpg"] }])) }),
    ))
    .await;
    let host = host_for(backend).await;

    let projects: serde_json::Value = reqwest::get(format!("{host}/api/projects")).await.unwrap().json().await.unwrap();
    assert_eq!(projects[0]["id"], "p1");
}

#[tokio::test]
async fn save_config_forwards_json_body() {
    let backend = serve(Router::new().route(
        "/save_config",
        post(|Json(body): Json<serde_json::Value>| async move {
            Json(json!({ "status": "success", "message": format!("saved port {}", body["arduino"]["port"]) }))
        }),
    ))
    .await;
    let host = host_for(backend).await;

    let response: serde_json::Value = reqwest::Client::new()
        .post(format!("{host}/save_config"))
        .json(&json!({ "arduino": { "port": "/dev/ttyUSB0" } }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(response["status"], "success");
    assert_eq!(response["message"], "saved port \"/dev/ttyUSB0\"");
}

#[tokio::test]
async fn unreachable_backend_returns_502_json() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let host = host_for(format!("http://{addr}")).await;

    let response = reqwest::get(format!("{host}/api/devices")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}
