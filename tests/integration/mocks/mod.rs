//! Mock implementations and fixtures shared by the integration tests.
//!
//! - [`MockExplorerApi`] - Mock implementation of the backend queries
//! - [`MockChainRepository`] - Mock implementation of the chain repository
//! - [`registry`] - A small chain registry with EVM, Cosmos and hub chains

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use std::{collections::HashMap, path::Path};

use interchain_explorer::{
	models::{Chain, ChainType},
	repositories::{ChainRepository, ChainRepositoryTrait, ChainService, RepositoryError},
	services::api::{ApiError, ExplorerApi},
	utils::tests::builders::chain::ChainBuilder,
};

mock! {
	/// Mock implementation of the explorer backend.
	///
	/// Only the raw query is mocked; the typed queries of [`ExplorerApi`]
	/// decode whatever it returns.
	pub ExplorerApi {}

	#[async_trait]
	impl ExplorerApi for ExplorerApi {
		async fn query(&self, method: &str, params: Value) -> Result<Value, ApiError>;
	}
}

mock! {
	/// Mock implementation of the chain repository.
	pub ChainRepository {}

	impl ChainRepositoryTrait for ChainRepository {
		fn load_all<'a>(&'a self, path: Option<&'a Path>) -> Result<HashMap<String, Chain>, RepositoryError>;
		fn get(&self, key: &str) -> Option<Chain>;
		fn get_all(&self) -> HashMap<String, Chain>;
	}
}

/// ethereum and avalanche (EVM), osmosis (Cosmos) and the axelarnet hub
pub fn registry() -> ChainService<ChainRepository> {
	let repository = ChainRepository::from_chains(vec![
		ChainBuilder::new()
			.id("ethereum")
			.name("Ethereum")
			.aliases(&["eth"])
			.build(),
		ChainBuilder::new()
			.id("avalanche")
			.name("Avalanche")
			.explorer("https://snowtrace.io", "/tx/{tx}")
			.build(),
		ChainBuilder::new()
			.id("osmosis")
			.name("Osmosis")
			.chain_type(ChainType::Cosmos)
			.explorer("https://www.mintscan.io/osmosis", "/txs/{tx}")
			.build(),
		ChainBuilder::new()
			.id("axelarnet")
			.name("Axelar")
			.chain_type(ChainType::Cosmos)
			.aliases(&["axelar"])
			.explorer("https://www.mintscan.io/axelar", "/txs/{tx}")
			.build(),
	])
	.with_overrides([("osmosis-4", "osmosis")]);

	ChainService::new_with_repository(repository).unwrap()
}
