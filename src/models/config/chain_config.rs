use std::{collections::HashMap, path::Path};

use url::Url;

use crate::models::{Chain, ConfigLoader};

use super::error::ConfigError;

/// Default directory holding one JSON file per chain
pub const DEFAULT_CHAINS_DIR: &str = "config/chains";

/// Default file mapping retired chain ids onto their canonical ids
pub const DEFAULT_CHAIN_OVERRIDES_FILE: &str = "config/chain_overrides.json";

/// Reads the legacy-id override table.
///
/// A missing file is an empty table. Keys and values are ids, not names.
pub fn load_chain_overrides(path: Option<&Path>) -> Result<HashMap<String, String>, ConfigError> {
	let path = path.unwrap_or(Path::new(DEFAULT_CHAIN_OVERRIDES_FILE));
	if !path.exists() {
		return Ok(HashMap::new());
	}
	let file = std::fs::File::open(path)?;
	let overrides: HashMap<String, String> = serde_json::from_reader(file)?;

	if let Some((from, _)) = overrides
		.iter()
		.find(|(from, to)| from.trim().is_empty() || to.trim().is_empty())
	{
		return Err(ConfigError::validation_error(format!(
			"Empty chain id in override entry {:?}",
			from
		)));
	}
	Ok(overrides)
}

impl ConfigLoader for Chain {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let chain_dir = path.unwrap_or(Path::new(DEFAULT_CHAINS_DIR));
		let mut pairs = Vec::new();

		if !chain_dir.exists() {
			return Err(ConfigError::file_error("chains directory not found"));
		}

		for entry in std::fs::read_dir(chain_dir)? {
			let path = entry?.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			match Self::load_from_path(&path) {
				Ok(chain) => pairs.push((chain.id.clone(), chain)),
				Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping chain file"),
			}
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let config: Chain = serde_json::from_reader(file)?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		if self.id.is_empty() {
			return Err("Chain id must not be empty".to_string());
		}

		if !self
			.id
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
		{
			return Err(
				"Chain id must contain only lowercase letters, numbers, dashes and underscores"
					.to_string(),
			);
		}

		if self.name.trim().is_empty() {
			return Err("Chain name must not be empty".to_string());
		}

		if let Some(explorer) = &self.explorer {
			if !(explorer.url.starts_with("http://") || explorer.url.starts_with("https://")) {
				return Err("Explorer url must start with http:// or https://".to_string());
			}
			Url::parse(&explorer.url).map_err(|e| format!("Invalid explorer url: {}", e))?;

			for (path, placeholder) in [
				(&explorer.transaction_path, "{tx}"),
				(&explorer.block_path, "{block}"),
				(&explorer.address_path, "{address}"),
			] {
				if !path.contains(placeholder) {
					return Err(format!(
						"Explorer path '{}' must contain {}",
						path, placeholder
					));
				}
			}
		}

		Ok(())
	}
}
