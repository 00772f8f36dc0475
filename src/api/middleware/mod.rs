//! HTTP middleware for request processing.
//!
//! Provides observability and response hardening layers.

pub mod security_headers;
pub mod tracing;
