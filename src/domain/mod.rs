//! Domain layer containing the link entity, its error taxonomy and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Failures surfaced by allocation and link lifecycle operations
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the HTTP or application layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::LinkError;
