//! Repositories backing the explorer's lookups.
//!
//! - `chain`: chain registry loaded from configuration or from the backend

mod chain;
mod error;

pub use chain::{ChainRepository, ChainRepositoryTrait, ChainService};
pub use error::RepositoryError;
