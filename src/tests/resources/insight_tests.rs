use super::create_test_api;
use crate::{DashboardError, ServerApi, ServerId};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_predict_failure_success() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/predict_server_failure/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "server_id": "abc",
            "is_likely_to_fail": true
        })))
        .mount(&mock_server)
        .await;

    let prediction = api
        .predict_failure(&ServerId::new_unchecked("abc"))
        .await
        .unwrap();
    assert!(prediction.is_likely_to_fail);
    assert_eq!(prediction.server_id.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_predict_failure_not_found() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/predict_server_failure/abc"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Server not found"})),
        )
        .mount(&mock_server)
        .await;

    let result = api.predict_failure(&ServerId::new_unchecked("abc")).await;
    assert!(matches!(result, Err(DashboardError::Transport(_))));
}

#[tokio::test]
async fn test_maintenance_schedule_success() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/generate_maintenance_schedule/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "server_id": "abc",
            "maintenance_date": "2026-10-25T14:03:11.482913"
        })))
        .mount(&mock_server)
        .await;

    let schedule = api
        .maintenance_schedule(&ServerId::new_unchecked("abc"))
        .await
        .unwrap();
    assert_eq!(schedule.maintenance_date, "2026-10-25T14:03:11.482913");
}

#[tokio::test]
async fn test_maintenance_schedule_missing_date() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/generate_maintenance_schedule/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"server_id": "abc"})))
        .mount(&mock_server)
        .await;

    let result = api
        .maintenance_schedule(&ServerId::new_unchecked("abc"))
        .await;
    assert!(matches!(result, Err(DashboardError::Decode(_))));
}
