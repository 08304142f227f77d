#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use roster::Roster;
use roster_frontend::{AppState, client::FighterApiClient};
use tower::ServiceExt;

/// Serve the standalone API on an ephemeral port and return its base URL.
pub async fn spawn_api(roster: Roster) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, roster_web::app(roster)).await.unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn unreachable_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

pub fn build_test_app(api_url: &str, roster: Roster) -> Router {
    let api = FighterApiClient::new(api_url).unwrap();
    roster_frontend::app(AppState { api, roster })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
