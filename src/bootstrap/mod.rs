//! Bootstrap module for initializing services and rendering pipelines.
//!
//! This module wires the configuration, the chain registry and the backend
//! client together for the binary, and turns derived pipelines into output.
//!
//! # Services
//! - `ExplorerApiClient`: Queries the explorer backend
//! - `ChainService`: Chain registry built from files or from `getChains`
//!
//! # Helpers
//! - `load_record_file`: Reads a transfer or GMP record saved as JSON
//! - `render_pipeline`: Logs a pipeline step by step with its links

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{error::Error, path::Path, sync::Arc};
use tracing::{info, warn};

use crate::{
	models::{load_chain_overrides, Chain, ExplorerConfig, Step},
	repositories::{ChainRepository, ChainService, RepositoryError},
	services::{
		api::{ExplorerApi, ExplorerApiClient, SearchResponse},
		steps::{displayed_steps, step_link},
		watcher::Pipeline,
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Creates the backend client for the configured endpoint
pub fn initialize_api(config: &ExplorerConfig) -> Result<Arc<ExplorerApiClient>> {
	Ok(Arc::new(ExplorerApiClient::new(&config.api_url)?))
}

/// Builds the chain registry.
///
/// Chain files under `chains_dir` (or the configured directory) win. When the
/// directory is missing or holds no valid chain, the registry is fetched from
/// the backend. The legacy-id override table is applied either way.
///
/// # Errors
/// Returns an error if neither source yields a chain, or if the override table
/// exists but cannot be read
pub async fn initialize_chains<A: ExplorerApi + ?Sized>(
	config: &ExplorerConfig,
	chains_dir: Option<&Path>,
	api: &A,
) -> Result<ChainService<ChainRepository>> {
	let dir = chains_dir.unwrap_or(&config.chains_dir);

	let chains: Vec<Chain> = match ChainRepository::new(Some(dir)) {
		Ok(repository) if !repository.chains.is_empty() => {
			info!(count = repository.chains.len(), dir = %dir.display(), "Loaded chains from files");
			repository.chains.into_values().collect()
		}
		Ok(_) | Err(_) => {
			warn!(dir = %dir.display(), "No chain files found, fetching chains from backend");
			api.get_chains().await?
		}
	};

	if chains.is_empty() {
		return Err(Box::new(RepositoryError::load_error("No chains available")));
	}

	let overrides = load_chain_overrides(Some(config.chain_overrides.as_path()))?;
	let repository = ChainRepository::from_chains(chains).with_overrides(overrides);
	Ok(ChainService::new_with_repository(repository)?)
}

/// Reads a record saved as JSON.
///
/// Accepts the record itself or a saved search response, in which case the
/// first result is used.
pub fn load_record_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let contents = std::fs::read_to_string(path)?;
	let value: Value = serde_json::from_str(&contents)?;

	let is_envelope = value.is_array() || value.get("data").is_some_and(Value::is_array);
	if is_envelope {
		return SearchResponse::<T>::from_value(value)?
			.data
			.into_iter()
			.next()
			.ok_or_else(|| format!("No record in {}", path.display()).into());
	}

	Ok(serde_json::from_value(value)?)
}

fn render_steps(label: &str, steps: &[Step], app_url: &str, show_all: bool) {
	let steps = if show_all {
		steps.to_vec()
	} else {
		displayed_steps(steps)
	};

	info!("=========== {} ===========", label);
	for (idx, step) in steps.iter().enumerate() {
		let link = step_link(step, app_url);
		info!(
			chain = step.chain.as_ref().map(|chain| chain.id.as_str()),
			tx_hash = link.tx_hash.as_deref(),
			url = link.url.as_deref(),
			"{}. [{}] {} ({})",
			idx + 1,
			step.id,
			step.title,
			step.status
		);
	}
}

/// Logs a pipeline, hop by hop for GMP calls
pub fn render_pipeline(pipeline: &Pipeline, app_url: &str, show_all: bool) {
	match pipeline {
		Pipeline::Transfer { steps } => render_steps("Transfer", steps, app_url, show_all),
		Pipeline::Gmp { hops, actions } => {
			if let Some(path) = &hops.path {
				info!(
					source = path.source.as_deref(),
					intermediate = path.intermediate.as_deref(),
					destination = path.destination.as_deref(),
					"Multihop route"
				);
			}
			if let Some(origin) = &hops.origin {
				render_steps("Origin hop", origin, app_url, show_all);
			}
			render_steps("GMP call", &hops.main, app_url, show_all);
			if let Some(callback) = &hops.callback {
				render_steps("Callback hop", callback, app_url, show_all);
			}
			if !actions.is_empty() {
				let actions: Vec<&str> = actions.iter().map(|action| action.as_str()).collect();
				info!(actions = ?actions, "Manual actions available");
			}
		}
	}
	info!(settled = pipeline.is_settled(), "=========================================");
}
