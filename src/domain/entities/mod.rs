//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a target URL, with click counters
//! - [`NewLink`] - Input for a fresh insert

pub mod link;

pub use link::{Link, NewLink};
