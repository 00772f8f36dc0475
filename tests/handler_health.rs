mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_ok() {
    let (server, _repo) = common::make_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["ok"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("message").is_none());
}
