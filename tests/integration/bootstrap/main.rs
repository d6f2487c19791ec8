use crate::integration::mocks::MockExplorerApi;

use interchain_explorer::{
	bootstrap::{initialize_api, initialize_chains, load_record_file},
	models::{ExplorerConfig, GmpRecord, TransferRecord},
	services::{
		api::ApiError,
		steps::StepDeriver,
		watcher::Pipeline,
	},
	utils::tests::builders::chain::ChainBuilder,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn config(dir: &TempDir) -> ExplorerConfig {
	ExplorerConfig {
		chains_dir: dir.path().join("chains"),
		chain_overrides: dir.path().join("chain_overrides.json"),
		..Default::default()
	}
}

#[tokio::test]
async fn test_chain_files_skip_backend() {
	let dir = TempDir::new().unwrap();
	let chains_dir = dir.path().join("chains");
	fs::create_dir(&chains_dir).unwrap();
	fs::write(
		chains_dir.join("ethereum.json"),
		serde_json::to_string(&ChainBuilder::new().id("ethereum").build()).unwrap(),
	)
	.unwrap();

	let mut api = MockExplorerApi::new();
	api.expect_query().never();

	let chains = initialize_chains(&config(&dir), None, &api).await.unwrap();
	assert!(chains.get("ethereum").is_some());
}

#[tokio::test]
async fn test_explicit_chains_dir_wins() {
	let dir = TempDir::new().unwrap();
	let other = dir.path().join("other");
	fs::create_dir(&other).unwrap();
	fs::write(
		other.join("avalanche.json"),
		serde_json::to_string(&ChainBuilder::new().id("avalanche").build()).unwrap(),
	)
	.unwrap();

	let mut api = MockExplorerApi::new();
	api.expect_query().never();

	let chains = initialize_chains(&config(&dir), Some(other.as_path()), &api)
		.await
		.unwrap();
	assert!(chains.get("avalanche").is_some());
}

#[tokio::test]
async fn test_backend_failure_without_files() {
	let dir = TempDir::new().unwrap();
	let mut api = MockExplorerApi::new();
	api.expect_query()
		.withf(|method, _| method == "getChains")
		.times(1)
		.returning(|_, _| Err(ApiError::response_error(503, "unavailable")));

	assert!(initialize_chains(&config(&dir), None, &api).await.is_err());
}

#[tokio::test]
async fn test_malformed_overrides_fail() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("chain_overrides.json"), "[1, 2]").unwrap();

	let mut api = MockExplorerApi::new();
	api.expect_query().returning(|_, _| {
		Ok(json!([{ "id": "ethereum", "name": "Ethereum", "chain_type": "evm" }]))
	});

	assert!(initialize_chains(&config(&dir), None, &api).await.is_err());
}

#[test]
fn test_initialize_api_rejects_bad_url() {
	let config = ExplorerConfig {
		api_url: "::".to_string(),
		..Default::default()
	};
	assert!(initialize_api(&config).is_err());
	assert!(initialize_api(&ExplorerConfig::default()).is_ok());
}

#[tokio::test]
async fn test_saved_records_derive_offline() {
	let dir = TempDir::new().unwrap();
	let chains_dir = dir.path().join("chains");
	fs::create_dir(&chains_dir).unwrap();
	for chain in [
		ChainBuilder::new().id("ethereum").build(),
		ChainBuilder::new().id("avalanche").build(),
	] {
		fs::write(
			chains_dir.join(format!("{}.json", chain.id)),
			serde_json::to_string(&chain).unwrap(),
		)
		.unwrap();
	}
	let transfer_path = dir.path().join("transfer.json");
	fs::write(
		&transfer_path,
		json!({
			"send": { "txhash": "0xAA", "source_chain": "ethereum", "destination_chain": "avalanche" },
			"command": { "transactionHash": "0xBB" }
		})
		.to_string(),
	)
	.unwrap();
	let gmp_path = dir.path().join("gmp.json");
	fs::write(
		&gmp_path,
		json!([{ "call": { "chain": "ethereum", "returnValues": { "destinationChain": "avalanche" } } }])
			.to_string(),
	)
	.unwrap();

	let mut api = MockExplorerApi::new();
	api.expect_query().never();
	let chains = initialize_chains(&config(&dir), None, &api).await.unwrap();
	let deriver = StepDeriver::new(&chains);

	let transfer: TransferRecord = load_record_file(&transfer_path).unwrap();
	let pipeline = Pipeline::Transfer {
		steps: deriver.transfer_steps(&transfer, None),
	};
	assert!(!pipeline.is_settled());

	let gmp: GmpRecord = load_record_file(&gmp_path).unwrap();
	let hops = deriver.gmp_hops(&gmp, chrono::Utc::now(), &[]);
	assert!(hops.path.is_none());
	assert!(!hops.main.is_empty());
}
