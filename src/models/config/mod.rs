//! Configuration loading and validation.
//!
//! - `chain_config`: chain definitions stored as one JSON file per chain
//! - `explorer_config`: explorer settings read from the environment

use std::path::Path;

mod chain_config;
mod error;
mod explorer_config;

pub use chain_config::{
	load_chain_overrides, DEFAULT_CHAINS_DIR, DEFAULT_CHAIN_OVERRIDES_FILE,
};
pub use error::ConfigError;
pub use explorer_config::ExplorerConfig;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>;

	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), String>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
