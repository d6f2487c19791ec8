//! Chain registry.
//!
//! Chains are looked up by id, display name or alias without regard to ASCII
//! case. A registry-wide override table maps retired identifiers onto the
//! chain that replaced them, so records indexed under an old id still resolve.

use std::{collections::HashMap, path::Path};

use crate::{
	models::{Chain, ConfigLoader},
	repositories::error::RepositoryError,
};

#[derive(Debug, Clone, Default)]
pub struct ChainRepository {
	/// Chains keyed by lowercased id
	pub chains: HashMap<String, Chain>,
	/// Lowercased legacy id to canonical chain id
	pub overrides: HashMap<String, String>,
}

impl ChainRepository {
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let chains: HashMap<String, Chain> = Chain::load_all(path)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load chains: {}", e)))?;
		Ok(Self::from_chains(chains.into_values()))
	}

	/// Builds a registry from chains obtained elsewhere, such as `getChains`
	pub fn from_chains(chains: impl IntoIterator<Item = Chain>) -> Self {
		let chains = chains
			.into_iter()
			.map(|chain| (chain.id.to_ascii_lowercase(), chain))
			.collect();
		Self {
			chains,
			overrides: HashMap::new(),
		}
	}

	/// Adds legacy-id overrides; each pair maps an old id onto a canonical one
	pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		self.overrides.extend(overrides.into_iter().map(|(from, to)| {
			(
				from.as_ref().trim().to_ascii_lowercase(),
				to.as_ref().trim().to_ascii_lowercase(),
			)
		}));
		self
	}

	fn lookup(&self, key: &str) -> Option<&Chain> {
		let key = key.trim().to_ascii_lowercase();
		if key.is_empty() {
			return None;
		}
		let key = self.overrides.get(&key).unwrap_or(&key);

		self.chains.get(key).or_else(|| {
			let mut matches: Vec<&Chain> =
				self.chains.values().filter(|chain| chain.matches(key)).collect();
			// Prefer live chains when a retired one shares an alias
			matches.sort_by_key(|chain| (chain.deprecated, chain.id.clone()));
			matches.into_iter().next()
		})
	}
}

pub trait ChainRepositoryTrait {
	fn load_all(&self, path: Option<&Path>) -> Result<HashMap<String, Chain>, RepositoryError>;
	fn get(&self, key: &str) -> Option<Chain>;
	fn get_all(&self) -> HashMap<String, Chain>;
}

impl ChainRepositoryTrait for ChainRepository {
	fn load_all(&self, path: Option<&Path>) -> Result<HashMap<String, Chain>, RepositoryError> {
		Chain::load_all(path)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load chains: {}", e)))
	}

	fn get(&self, key: &str) -> Option<Chain> {
		self.lookup(key).cloned()
	}

	fn get_all(&self) -> HashMap<String, Chain> {
		self.chains.clone()
	}
}

/// Chain lookups used while deriving steps
pub struct ChainService<T: ChainRepositoryTrait> {
	repository: T,
}

impl<T: ChainRepositoryTrait> ChainService<T> {
	pub fn new(path: Option<&Path>) -> Result<ChainService<ChainRepository>, RepositoryError> {
		let repository = ChainRepository::new(path)?;
		Ok(ChainService { repository })
	}

	pub fn new_with_repository(repository: T) -> Result<Self, RepositoryError> {
		Ok(ChainService { repository })
	}

	pub fn get(&self, key: &str) -> Option<Chain> {
		self.repository.get(key)
	}

	/// Resolves an optional chain reference; unknown or absent chains are `None`
	pub fn resolve(&self, key: Option<&str>) -> Option<Chain> {
		key.and_then(|key| self.repository.get(key))
	}

	pub fn get_all(&self) -> HashMap<String, Chain> {
		self.repository.get_all()
	}
}
