//! HTTP API integration tests.
//!
//! Tests for REST API endpoints (health check, channel list).

mod fixtures;
use fixtures::TestServer;
use roji_server::domain::Name;

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_channels_list_endpoint_empty() {
    // テスト項目: チャンネルがない場合 /api/channels は空の配列を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/channels", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_channels_list_endpoint() {
    // テスト項目: /api/channels エンドポイントがチャンネル一覧を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let usecase = roji_server::usecase::UpdateChannelUseCase::new(server.repository());
    let outcome = usecase
        .execute(
            Name::new("paul").unwrap(),
            None,
            Name::new("Coders").unwrap(),
            vec![Name::new("anna").unwrap()],
        )
        .await
        .unwrap();
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/channels", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let channels = body.as_array().expect("Response should be an array");
    assert_eq!(channels.len(), 1);

    let channel = &channels[0];
    assert_eq!(channel["id"], outcome.channel_id.to_string());
    assert_eq!(channel["name"], "Coders");
    assert_eq!(channel["declared_by"], "paul");
    assert_eq!(channel["members"], serde_json::json!(["anna"]));
    assert!(channel["created_at"].is_string());
}
