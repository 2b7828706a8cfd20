use crate::integration::helpers::client::TestClient;
use axum::http::StatusCode;

fn offline_client() -> TestClient {
    // these endpoints never reach the AppView
    TestClient::new("http://127.0.0.1:9".to_string())
}

/// 観点: /health エンドポイントが 200 OK を返すか
#[tokio::test]
async fn test_health_check() {
    let client = offline_client();
    let (status, body) = client.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_root_describes_embed_endpoint() {
    let client = offline_client();
    let (status, body) = client.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/embed?actor="));
}

/// 観点: 未定義のパスは JSON の 404 を返すか
#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let client = offline_client();
    let (status, body) = client.get("/xrpc/app.bsky.feed.getFeedSkeleton").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["error"],
        "No route for /xrpc/app.bsky.feed.getFeedSkeleton"
    );
}

/// 観点: 注入した api_base に向けて取得し、接続失敗は 200 + エラー文になるか
#[tokio::test]
async fn test_embed_uses_injected_api_base() {
    let client = offline_client();
    let (status, body) = client.get_embed("actor=alice.test").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Error fetching post from Bluesky: "), "{}", body);
}
