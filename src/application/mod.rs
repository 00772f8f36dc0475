//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_allocator::LinkAllocator`] - Code validation, collision checks and reuse
//! - [`services::link_service::LinkService`] - Link lifecycle operations

pub mod services;
