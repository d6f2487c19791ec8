//! Explorer backend access.
//!
//! - `client`: the [`ExplorerApi`] trait and its HTTP implementation
//! - `error`: errors raised while querying the backend

mod client;
mod error;

pub use client::{ExplorerApi, ExplorerApiClient, SearchResponse};
pub use error::ApiError;
