use crate::integration::helpers::client::TestClient;
use crate::integration::helpers::mock_server::MockServer;
use authorfeed::render::STYLE_BLOCK;
use axum::http::StatusCode;

/// 観点: 正常系でスタイル 1 つ + 3 投稿のフラグメントが返るか
#[tokio::test]
async fn test_embed_renders_feed() {
    let server = MockServer::start().await;
    let client = TestClient::new(server.base_url());

    let (status, body) = client.get_embed("actor=alice.test").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(STYLE_BLOCK));
    assert_eq!(body.matches("<style>").count(), 1);
    assert_eq!(body.matches("<div class=\"bluesky-post\">").count(), 3);

    // 画像は images#view の投稿だけ、順序どおり
    assert_eq!(body.matches("class=\"bluesky-image\"").count(), 2);
    let first = body.find("src=\"https://cdn.example/1.jpg\" alt=\"first\"").unwrap();
    let second = body.find("src=\"https://cdn.example/2.jpg\" alt=\"second\"").unwrap();
    assert!(first < second);
    assert!(!body.contains("ext.jpg"));

    assert!(body.contains("<span class=\"author-name\">Mock User</span>"));
    assert!(body.contains("@alice.test · 5m"));
    assert!(body.contains("@alice.test · 3h"));
    assert!(body.contains("@alice.test · 2d"));
    assert!(body.contains("<p>line one<br>line two</p>"));
    assert!(body.contains("<span class=\"icon\">❤️ 7</span>"));

    let order = ["two pictures", "a link", "line one"]
        .map(|text| body.find(text).unwrap());
    assert!(order[0] < order[1] && order[1] < order[2]);
}

/// 観点: limit 省略時は limit=10、明示時はその値がそのままクエリに乗るか
#[tokio::test]
async fn test_embed_forwards_limit() {
    let server = MockServer::start().await;
    let client = TestClient::new(server.base_url());

    client.get_embed("actor=alice.test").await;
    client.get_embed("actor=alice.test&limit=5").await;
    client.get_embed("actor=alice.test&limit=").await;
    client.get_embed("actor=alice.test&limit=05").await;

    assert_eq!(
        server.received_queries(),
        vec![
            "actor=alice.test&limit=10&filter=posts_and_author_threads",
            "actor=alice.test&limit=5&filter=posts_and_author_threads",
            "actor=alice.test&limit=10&filter=posts_and_author_threads",
            "actor=alice.test&limit=05&filter=posts_and_author_threads",
        ]
    );
}

/// 観点: JSON のエラー本文はパースされたフィールドが出るか
#[tokio::test]
async fn test_embed_structured_upstream_error() {
    let server = MockServer::start().await;
    let client = TestClient::new(server.base_url());

    let (status, body) = client.get_embed("actor=missing.test").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<style>"));
    assert!(body.starts_with("Error fetching post from Bluesky (status: 400 Bad Request). Details: "));
    assert!(body.contains("\"error\":\"InvalidRequest\""));
    assert!(body.contains("\"message\":\"Profile not found\""));
}

/// 観点: JSON でないエラー本文はそのまま出るか
#[tokio::test]
async fn test_embed_plain_text_upstream_error() {
    let server = MockServer::start().await;
    let client = TestClient::new(server.base_url());

    let (_, body) = client.get_embed("actor=down.test").await;

    assert_eq!(
        body,
        "Error fetching post from Bluesky (status: 503 Service Unavailable). Details: Service Unavailable"
    );
}

/// 観点: 2xx でも本文が壊れていればパニックせず決まった文字列になるか
#[tokio::test]
async fn test_embed_malformed_payload() {
    let server = MockServer::start().await;
    let client = TestClient::new(server.base_url());

    let (status, body) = client.get_embed("actor=garbage.test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "Error fetching post from Bluesky (status: 200 OK). Details: <html>not a feed</html>"
    );
}

#[tokio::test]
async fn test_embed_invalid_limit_does_not_call_upstream() {
    let server = MockServer::start().await;
    let client = TestClient::new(server.base_url());

    let (status, body) = client.get_embed("actor=alice.test&limit=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Error fetching post from Bluesky: invalid limit \"0\"");
    assert!(server.received_queries().is_empty());
}

/// 観点: actor がなければ 400 を返し、上流には問い合わせないか
#[tokio::test]
async fn test_embed_missing_actor() {
    let server = MockServer::start().await;
    let client = TestClient::new(server.base_url());

    let (status, body) = client.get("/embed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Missing actor parameter");

    let (status, _) = client.get_embed("actor=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(server.received_queries().is_empty());
}
