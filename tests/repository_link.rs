//! PostgreSQL link store tests.
//!
//! Require a running database: `DATABASE_URL=... cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::entities::NewLink;
use tinylink::domain::error::LinkError;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::PgLinkRepository;

fn new_link(code: &str, target: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        target: target.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let created = repo.insert(new_link("abc123", "https://example.com")).await.unwrap();
    assert_eq!(created.code, "abc123");
    assert_eq!(created.clicks, 0);
    assert!(!created.deleted);
    assert!(created.last_clicked.is_none());

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found, created);

    assert!(repo.find_by_code("nope01").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_duplicate_is_code_taken(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.insert(new_link("abc123", "https://example.com")).await.unwrap();

    let result = repo.insert(new_link("abc123", "https://other.com")).await;

    assert!(matches!(result, Err(LinkError::CodeTaken(_))));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_soft_delete_and_reuse(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let original = repo.insert(new_link("abc123", "https://example.com")).await.unwrap();
    assert_eq!(
        repo.increment_click("abc123").await.unwrap().as_deref(),
        Some("https://example.com")
    );

    assert!(repo.reuse("abc123", "https://other.com").await.unwrap().is_none());

    assert!(repo.soft_delete("abc123").await.unwrap());
    assert!(!repo.soft_delete("abc123").await.unwrap());

    let reused = repo.reuse("abc123", "https://other.com").await.unwrap().unwrap();
    assert_eq!(reused.id, original.id);
    assert_eq!(reused.target, "https://other.com");
    assert_eq!(reused.clicks, 0);
    assert!(reused.last_clicked.is_none());
    assert!(!reused.deleted);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_increments(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    repo.insert(new_link("abc123", "https://example.com")).await.unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_click("abc123").await.unwrap() })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().is_some());
    }

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.clicks, 20);
    assert!(link.last_clicked.is_some());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_active_excludes_deleted(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.insert(new_link("first1", "https://a.com")).await.unwrap();
    repo.insert(new_link("second", "https://b.com")).await.unwrap();
    repo.insert(new_link("third3", "https://c.com")).await.unwrap();
    repo.soft_delete("second").await.unwrap();

    let codes: Vec<String> = repo
        .list_active()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.code)
        .collect();

    assert_eq!(codes, vec!["third3", "first1"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_increment_returns_target_of_counted_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.insert(new_link("abc123", "https://example.com")).await.unwrap();
    repo.soft_delete("abc123").await.unwrap();

    assert!(repo.increment_click("abc123").await.unwrap().is_none());

    repo.reuse("abc123", "https://other.com").await.unwrap();
    let target = repo.increment_click("abc123").await.unwrap();

    assert_eq!(target.as_deref(), Some("https://other.com"));
}
