//! Core services of the explorer.
//!
//! - `api`: Queries against the explorer backend
//! - `steps`: Step derivation for transfers and GMP calls
//! - `watcher`: Fixed-interval refresh of a transaction's steps

pub mod api;
pub mod steps;
pub mod watcher;
