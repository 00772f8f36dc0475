mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use tinylink::domain::repositories::LinkRepository;
use tinylink::utils::code_generator::is_valid_code;

// ─── POST /api/links ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_with_desired_code() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "code": "abc123" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["code"], "abc123");
    assert_eq!(body["target"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert_eq!(body["deleted"], false);
    assert!(body["last_clicked"].is_null());
    assert!(body["id"].is_i64());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_with_generated_code() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(is_valid_code(code));
}

#[tokio::test]
async fn test_create_with_empty_code_generates_one() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "code": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["code"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_create_duplicate_code_conflicts() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "abc123", "https://example.com").await;

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://other.com", "code": "abc123" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.target, "https://example.com");
}

#[tokio::test]
async fn test_create_invalid_target() {
    let (server, _repo) = common::make_server();

    for target in [
        "not-a-url",
        "ftp://example.com",
        "",
        "http://localhost",
        "https://example.com/a\nb",
        "https://exa\tmple.com/",
        " https://example.com",
    ] {
        let response = server
            .post("/api/links")
            .json(&json!({ "target": target }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_create_invalid_code() {
    let (server, repo) = common::make_server();

    for code in ["abc", "abc-123", "abcdefghi", "abc 123"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "target": "https://example.com", "code": code }))
            .await;

        response.assert_status_bad_request();
    }

    assert!(repo.list_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_target_is_not_stored() {
    let (server, repo) = common::make_server();

    server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com/a\nb", "code": "abc123" }))
        .await
        .assert_status_bad_request();

    assert!(repo.find_by_code("abc123").await.unwrap().is_none());
    server.get("/abc123").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_internationalized_target() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.xn--p1ai/", "code": "idn001" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["target"], "https://example.xn--p1ai/");
}

#[tokio::test]
async fn test_create_missing_body_fields() {
    let (server, _repo) = common::make_server();

    let response = server.post("/api/links").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_reuse_after_delete_keeps_identity() {
    let (server, _repo) = common::make_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "code": "abc123" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let original_id = created.json::<Value>()["id"].clone();

    server.get("/abc123").await.assert_status(StatusCode::FOUND);

    server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "code": "abc123" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    let deleted = server.delete("/api/links/abc123").await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>(), json!({ "ok": true }));

    let reused = server
        .post("/api/links")
        .json(&json!({ "target": "https://other.com", "code": "abc123" }))
        .await;

    reused.assert_status(StatusCode::CREATED);
    let body = reused.json::<Value>();
    assert_eq!(body["id"], original_id);
    assert_eq!(body["target"], "https://other.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());
    assert_eq!(body["deleted"], false);
}

// ─── GET /api/links ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_active_links_newest_first() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "first1", "https://a.com").await;
    common::create_test_link(&repo, "second", "https://b.com").await;
    common::create_deleted_link(&repo, "gone01", "https://c.com").await;
    common::create_test_link(&repo, "third3", "https://d.com").await;

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let body = response.json::<Vec<Value>>();
    let codes: Vec<&str> = body.iter().map(|l| l["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["third3", "second", "first1"]);
}

#[tokio::test]
async fn test_list_empty() {
    let (server, _repo) = common::make_server();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

// ─── GET /api/links/{code} ───────────────────────────────────────────────────

#[tokio::test]
async fn test_stats_for_active_link() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "stat01", "https://example.com").await;

    server.get("/stat01").await.assert_status(StatusCode::FOUND);
    server.get("/stat01").await.assert_status(StatusCode::FOUND);

    let response = server.get("/api/links/stat01").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["clicks"], 2);
    assert!(body["last_clicked"].is_string());
}

#[tokio::test]
async fn test_stats_for_deleted_or_missing_link() {
    let (server, repo) = common::make_server();
    common::create_deleted_link(&repo, "gone01", "https://example.com").await;

    server.get("/api/links/gone01").await.assert_status_not_found();
    server.get("/api/links/nope01").await.assert_status_not_found();
    server.get("/api/links/x").await.assert_status_not_found();
}

// ─── DELETE /api/links/{code} ────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_twice() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "del001", "https://example.com").await;

    let response = server.delete("/api/links/del001").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["ok"], true);

    server.delete("/api/links/del001").await.assert_status_not_found();

    let link = repo.find_by_code("del001").await.unwrap().unwrap();
    assert!(link.deleted);
    assert_eq!(link.target, "https://example.com");
}

#[tokio::test]
async fn test_delete_invalid_code() {
    let (server, _repo) = common::make_server();

    server.delete("/api/links/bad-code").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_missing() {
    let (server, _repo) = common::make_server();

    server.delete("/api/links/nope01").await.assert_status_not_found();
}
