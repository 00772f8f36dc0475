#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use tinylink::domain::entities::NewLink;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::app_router;
use tinylink::state::AppState;
use tinylink::utils::code_generator::DEFAULT_CODE_LENGTH;

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repository.clone(), DEFAULT_CODE_LENGTH);

    (state, repository)
}

pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repository)
}

pub async fn create_test_link(repository: &InMemoryLinkRepository, code: &str, target: &str) {
    repository
        .insert(NewLink {
            code: code.to_string(),
            target: target.to_string(),
        })
        .await
        .unwrap();
}

pub async fn create_deleted_link(repository: &InMemoryLinkRepository, code: &str, target: &str) {
    create_test_link(repository, code, target).await;
    assert!(repository.soft_delete(code).await.unwrap());
}
