//! Utility modules for common functionality.
//!
//! - constants: Constants for the application
//! - http: Retrying HTTP client construction
//! - logging: Logging utilities
//! - tests: Builders for test instances of models

pub mod constants;
pub mod http;
pub mod logging;

pub use constants::*;
