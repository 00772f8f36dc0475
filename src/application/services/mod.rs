//! Business logic services for the application layer.

pub mod link_allocator;
pub mod link_service;

pub use link_allocator::LinkAllocator;
pub use link_service::LinkService;
