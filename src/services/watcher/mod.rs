//! Fixed-interval refresh of a transaction's steps.

mod error;
mod service;

pub use error::WatcherError;
pub use service::{Pipeline, StepWatcher, WatchTarget, WatcherConfig};
