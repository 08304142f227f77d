//! Integration tests for the fighter and health endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use roster::models::Fighter;

#[tokio::test]
async fn list_fighters_returns_whole_roster_in_order() {
    let (app, roster) = build_test_app();
    let response = get(app, "/api/fighters").await;

    assert_eq!(response.status(), StatusCode::OK);

    let fighters: Vec<Fighter> = serde_json::from_value(body_json(response).await).unwrap();
    let ids: Vec<u32> = fighters.iter().map(|f| f.id).collect();
    let expected: Vec<u32> = roster.fighters().iter().map(|f| f.id).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn get_fighter_returns_full_record() {
    let (app, roster) = build_test_app();
    let response = get(app, "/api/fighters/1").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert!(json["weightClass"].is_string());
    assert!(json["currentFormRating"].is_number());
    assert!(json["record"]["wins"].is_number());
    assert!(json["stats"]["strikingAccuracy"].is_number());
    assert!(json["recentFights"].is_array());

    let fighter: Fighter = serde_json::from_value(json).unwrap();
    let expected = &roster.fighters()[0];
    assert_eq!(fighter.name, expected.name);
    assert_eq!(fighter.record, expected.record);
    assert_eq!(fighter.recent_fights.len(), expected.recent_fights.len());
}

#[tokio::test]
async fn every_fighter_is_reachable_by_id() {
    let (app, roster) = build_test_app();

    for fighter in roster.fighters() {
        let response = get(app.clone(), &format!("/api/fighters/{}", fighter.id)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["id"], fighter.id);
        assert_eq!(json["name"], fighter.name.as_str());
    }
}

#[tokio::test]
async fn unknown_fighter_returns_404_with_error() {
    let (app, _) = build_test_app();
    let response = get(app, "/api/fighters/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Fighter not found" })
    );
}

#[tokio::test]
async fn non_numeric_id_returns_404_with_error() {
    let (app, _) = build_test_app();
    let response = get(app, "/api/fighters/jones").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Fighter not found");
}

#[tokio::test]
async fn weight_class_lookup_ignores_case() {
    let (app, roster) = build_test_app();
    let expected: Vec<u32> = roster
        .fighters()
        .iter()
        .filter(|f| f.weight_class == "Lightweight")
        .map(|f| f.id)
        .collect();
    assert!(!expected.is_empty());

    for label in ["Lightweight", "lightweight", "LIGHTWEIGHT"] {
        let response = get(app.clone(), &format!("/api/fighters/weight-class/{label}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let fighters: Vec<Fighter> = serde_json::from_value(body_json(response).await).unwrap();
        let ids: Vec<u32> = fighters.iter().map(|f| f.id).collect();
        assert_eq!(ids, expected, "label {label}");
    }
}

#[tokio::test]
async fn weight_class_with_space_is_decoded() {
    let (app, _) = build_test_app();
    let response = get(app, "/api/fighters/weight-class/light%20heavyweight").await;

    assert_eq!(response.status(), StatusCode::OK);

    let fighters: Vec<Fighter> = serde_json::from_value(body_json(response).await).unwrap();
    assert!(!fighters.is_empty());
    assert!(fighters.iter().all(|f| f.weight_class == "Light Heavyweight"));
}

#[tokio::test]
async fn unknown_weight_class_returns_empty_array() {
    let (app, _) = build_test_app();
    let response = get(app, "/api/fighters/weight-class/Strawweight").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn health_check_returns_ok() {
    let (app, _) = build_test_app();
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _) = build_test_app();
    let response = get(app, "/api/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Resource not found");
}

#[tokio::test]
async fn openapi_document_lists_fighter_paths() {
    let (app, _) = build_test_app();
    let response = get(app, "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["paths"]["/api/fighters"].is_object());
    assert!(json["paths"]["/api/fighters/{id}"].is_object());
    assert!(json["paths"]["/api/health"].is_object());
}
