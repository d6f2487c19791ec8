//! Explorer settings read from the environment.
//!
//! Variables (a `.env` file is honoured by the binary through `dotenvy`):
//! - `EXPLORER_API_URL`: backend query endpoint
//! - `EXPLORER_APP_URL`: base of internal links (poll and batch pages)
//! - `EXPLORER_HUB_CHAIN`: id of the hub chain
//! - `EXPLORER_POLL_INTERVAL_SECS`: watcher refresh interval
//! - `EXPLORER_CHAINS_DIR`: directory of chain definitions
//! - `EXPLORER_CHAIN_OVERRIDES`: legacy chain id table
//! - `EXPLORER_GAS_CHECK_WINDOW_SECS`, `EXPLORER_EXECUTE_ERROR_GRACE_SECS`,
//!   `EXPLORER_IBC_WAIT_WINDOW_SECS`, `EXPLORER_MANUAL_ACTION_WINDOW_SECS`,
//!   `EXPLORER_FINALITY_BUFFER_SECS`: step timing overrides

use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::{
	models::{
		config::chain_config::{DEFAULT_CHAINS_DIR, DEFAULT_CHAIN_OVERRIDES_FILE},
		StepTimings,
	},
	utils::constants::{DEFAULT_API_URL, DEFAULT_POLL_INTERVAL_SECS, HUB_CHAIN_ID},
};

use super::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
	pub api_url: String,
	pub app_url: String,
	pub hub_chain: String,
	pub poll_interval: Duration,
	pub chains_dir: PathBuf,
	pub chain_overrides: PathBuf,
	pub timings: StepTimings,
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			api_url: DEFAULT_API_URL.to_string(),
			app_url: String::new(),
			hub_chain: HUB_CHAIN_ID.to_string(),
			poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
			chains_dir: PathBuf::from(DEFAULT_CHAINS_DIR),
			chain_overrides: PathBuf::from(DEFAULT_CHAIN_OVERRIDES_FILE),
			timings: StepTimings::default(),
		}
	}
}

impl ExplorerConfig {
	/// Builds the configuration from process environment variables
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary key lookup, falling back to
	/// defaults for anything unset
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();
		let timings = StepTimings {
			gas_check_window: parse_var(
				&lookup,
				"EXPLORER_GAS_CHECK_WINDOW_SECS",
				defaults.timings.gas_check_window,
			)?,
			execute_error_grace: parse_var(
				&lookup,
				"EXPLORER_EXECUTE_ERROR_GRACE_SECS",
				defaults.timings.execute_error_grace,
			)?,
			ibc_wait_window: parse_var(
				&lookup,
				"EXPLORER_IBC_WAIT_WINDOW_SECS",
				defaults.timings.ibc_wait_window,
			)?,
			manual_action_window: parse_var(
				&lookup,
				"EXPLORER_MANUAL_ACTION_WINDOW_SECS",
				defaults.timings.manual_action_window,
			)?,
			finality_buffer: parse_var(
				&lookup,
				"EXPLORER_FINALITY_BUFFER_SECS",
				defaults.timings.finality_buffer,
			)?,
		};

		let config = Self {
			api_url: lookup("EXPLORER_API_URL").unwrap_or(defaults.api_url),
			app_url: lookup("EXPLORER_APP_URL").unwrap_or(defaults.app_url),
			hub_chain: lookup("EXPLORER_HUB_CHAIN").unwrap_or(defaults.hub_chain),
			poll_interval: Duration::from_secs(parse_var(
				&lookup,
				"EXPLORER_POLL_INTERVAL_SECS",
				defaults.poll_interval.as_secs(),
			)?),
			chains_dir: lookup("EXPLORER_CHAINS_DIR")
				.map(PathBuf::from)
				.unwrap_or(defaults.chains_dir),
			chain_overrides: lookup("EXPLORER_CHAIN_OVERRIDES")
				.map(PathBuf::from)
				.unwrap_or(defaults.chain_overrides),
			timings,
		};

		config.validate().map_err(ConfigError::validation_error)?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), String> {
		if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
			return Err("API url must start with http:// or https://".to_string());
		}
		url::Url::parse(&self.api_url).map_err(|e| format!("Invalid API url: {}", e))?;

		if self.hub_chain.trim().is_empty() {
			return Err("Hub chain must not be empty".to_string());
		}

		if self.poll_interval.is_zero() {
			return Err("Poll interval must be greater than 0".to_string());
		}

		let timings = &self.timings;
		if [
			timings.gas_check_window,
			timings.execute_error_grace,
			timings.ibc_wait_window,
			timings.manual_action_window,
			timings.finality_buffer,
		]
		.iter()
		.any(|secs| *secs < 0)
		{
			return Err("Step timings must not be negative".to_string());
		}

		Ok(())
	}
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
	F: Fn(&str) -> Option<String>,
	T: FromStr,
	T::Err: std::fmt::Display,
{
	match lookup(key) {
		Some(raw) => raw
			.trim()
			.parse()
			.map_err(|e| ConfigError::env_error(format!("{}={}: {}", key, raw, e))),
		None => Ok(default),
	}
}
