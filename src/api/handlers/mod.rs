//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod links;
pub mod redirect;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler, link_stats_handler, list_links_handler};
pub use redirect::redirect_handler;
