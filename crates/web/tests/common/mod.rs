#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use roster::Roster;
use tower::ServiceExt;

/// Build the API router over the embedded dataset, as `main.rs` does.
pub fn build_test_app() -> (Router, Roster) {
    let roster = Roster::load().expect("embedded dataset must load");
    (roster_web::app(roster.clone()), roster)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
