use super::create_test_api;
use crate::{
    DashboardError, MetricsInput, NewServer, ServerApi, ServerId, ServerUpdate,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[tokio::test]
async fn test_list_servers_success() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "_id": "65f1a2b3c4d5e6f708192a3b",
                "name": "web-1",
                "metrics": {"cpu_usage": 42, "memory_usage": 77},
                "logs": []
            },
            {
                "_id": "65f1a2b3c4d5e6f708192a3c",
                "name": "db-1",
                "metrics": {"cpu_usage": 91, "memory_usage": 64},
                "logs": [{"level": "warn", "message": "slow query"}]
            }
        ])))
        .mount(&mock_server)
        .await;

    let servers = api.list_servers().await.unwrap();
    assert_eq!(servers.len(), 2);

    let web = &servers[0];
    assert_eq!(web.id.as_str(), "65f1a2b3c4d5e6f708192a3b");
    assert_eq!(web.name, "web-1");
    assert_eq!(web.metrics.cpu_usage, Some(42.0));
    assert_eq!(web.metrics.memory_usage, Some(77.0));
    assert!(web.logs.is_empty());

    let db = &servers[1];
    assert_eq!(db.name, "db-1");
    assert_eq!(db.logs.len(), 1);
}

#[tokio::test]
async fn test_list_servers_empty() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    assert!(api.list_servers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_servers_wrong_shape() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"servers": []})),
        )
        .mount(&mock_server)
        .await;

    assert!(matches!(
        api.list_servers().await,
        Err(DashboardError::Decode(_))
    ));
}

#[tokio::test]
async fn test_get_single_server() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/servers/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "abc",
            "name": "web-1",
            "metrics": {"cpu_usage": 12.5, "memory_usage": 30}
        })))
        .mount(&mock_server)
        .await;

    let server = api.server(&ServerId::new_unchecked("abc")).await.unwrap();
    assert_eq!(server.name, "web-1");
    assert_eq!(server.metrics.cpu_usage, Some(12.5));
}

#[tokio::test]
async fn test_get_single_server_invalid_id() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/servers/not-an-object-id"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "Invalid server ID format"})),
        )
        .mount(&mock_server)
        .await;

    let result = api.server(&ServerId::new_unchecked("not-an-object-id")).await;
    match result {
        Err(DashboardError::Transport(message)) => {
            assert!(message.contains("Invalid server ID format"))
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_server_body() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("POST"))
        .and(path("/servers"))
        .and(body_json(serde_json::json!({
            "name": "web-1",
            "metrics": {"cpu_usage": 42, "memory_usage": 77},
            "logs": []
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"_id": "new-id"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = NewServer::new("web-1", MetricsInput::parse("42", "77"));
    api.create_server(&server).await.unwrap();
}

#[tokio::test]
async fn test_update_server_body_has_no_logs() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/servers/abc"))
        .and(body_json(serde_json::json!({
            "name": "web-2",
            "metrics": {"cpu_usage": 10, "memory_usage": null}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Server updated successfully"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let update = ServerUpdate {
        name: "web-2".to_string(),
        metrics: MetricsInput::parse("10", ""),
    };
    api.update_server(&ServerId::new_unchecked("abc"), &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_unchanged_server_is_error() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/servers/abc"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": "Server not found or no changes made"})),
        )
        .mount(&mock_server)
        .await;

    let update = ServerUpdate {
        name: "web-1".to_string(),
        metrics: MetricsInput::parse("1", "2"),
    };
    let result = api
        .update_server(&ServerId::new_unchecked("abc"), &update)
        .await;
    assert!(matches!(result, Err(DashboardError::Transport(_))));
}

#[tokio::test]
async fn test_delete_server_success() {
    let mock_server = MockServer::start().await;
    let api = create_test_api(&mock_server);

    Mock::given(method("DELETE"))
        .and(path("/servers/abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Server deleted successfully"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    api.delete_server(&ServerId::new_unchecked("abc"))
        .await
        .unwrap();
}
