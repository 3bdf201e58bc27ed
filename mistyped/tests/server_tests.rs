// End-to-end tests over a real socket

use mistyped::handlers::AppState;
use mistyped::server;
use mistyped_core::Keymap;
use mistyped_scanner::test_utils::StaticTransport;
use mistyped_scanner::{CheckResponse, Prober};
use reqwest::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;

async fn spawn_server() -> SocketAddr {
    let transport = StaticTransport::new().with_response("http://bo.dev", StatusCode::OK);
    let state = Arc::new(AppState::new(Keymap::qwertz(), Prober::new(transport)));

    let listener = server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, state));
    addr
}

#[tokio::test]
async fn test_checkurl_over_http() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{}/checkurl/?url=go.dev", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: CheckResponse = response.json().await.unwrap();
    assert_eq!(body.available, vec!["http://bo.dev"]);
    assert_eq!(body.unavailable.len(), 3);
}

#[tokio::test]
async fn test_missing_url_over_http() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{}/checkurl/", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["access-control-allow-methods"],
        "GET,POST, PUT"
    );
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_form_post_over_http() {
    let addr = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/checkurl/", addr))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("url=www.go.dev")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: CheckResponse = response.json().await.unwrap();
    assert_eq!(body.available, vec!["http://bo.dev"]);
}

#[tokio::test]
async fn test_bind_conflict_is_an_error() {
    let first = server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = first.local_addr().unwrap();

    let second = server::bind(addr).await;
    assert!(second.is_err());
}
