use super::create_test_api;
use crate::{DashboardError, HistorySeries, ServerApi, ServerId};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_server_history_success() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/server_history/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "labels": ["14:00", "14:01", "14:02"],
            "data": [41, 47, 38]
        })))
        .mount(&mock_server)
        .await;

    let history = api
        .server_history(&ServerId::new_unchecked("abc"))
        .await
        .unwrap();
    assert_eq!(history.labels, vec!["14:00", "14:01", "14:02"]);
    assert_eq!(history.data, vec![41.0, 47.0, 38.0]);
}

#[tokio::test]
async fn test_server_history_encodes_identifier() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/server_history/a%20b"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"labels": [], "data": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let history = api
        .server_history(&ServerId::new_unchecked("a b"))
        .await
        .unwrap();
    assert_eq!(history, HistorySeries::default());
}

#[tokio::test]
async fn test_server_history_malformed() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/server_history/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"labels\": ["))
        .mount(&mock_server)
        .await;

    let result = api.server_history(&ServerId::new_unchecked("abc")).await;
    assert!(matches!(result, Err(DashboardError::Decode(_))));
}
