//! Utility functions for code handling, URL validation and error classification.
//!
//! - [`code_generator`] - Short code validation and generation
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
