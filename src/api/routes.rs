//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, link_stats_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`          - Create a link
/// - `GET    /links`          - List active links
/// - `GET    /links/{code}`   - Stats for one link
/// - `DELETE /links/{code}`   - Soft-delete a link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(link_stats_handler).delete(delete_link_handler),
        )
}
