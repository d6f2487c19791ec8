//! Cross-chain explorer entry point.
//!
//! This binary derives the step pipeline of a token transfer or a general
//! message passing call, either once or continuously while the transaction is
//! in flight.
//!
//! # Flow
//! 1. Loads `.env` and the explorer configuration from the environment
//! 2. Builds the chain registry from chain files, falling back to the backend
//! 3. Derives steps from a saved record (`--file`) or from the backend
//!    (`--transfer` / `--gmp`), once or until settled with `--watch`
//! 4. Handles graceful shutdown on Ctrl+C while watching

use interchain_explorer::{
	bootstrap::{initialize_api, initialize_chains, load_record_file, render_pipeline, Result},
	models::{ExplorerConfig, GmpRecord, TransferRecord, TransferType},
	repositories::ChainRepository,
	services::{
		steps::StepDeriver,
		watcher::{Pipeline, StepWatcher, WatchTarget, WatcherConfig},
	},
	utils::logging::setup_logging,
};

use chrono::Utc;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use dotenvy::dotenv;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::watch;
use tracing::{error, info, instrument};

fn cli() -> Command {
	Command::new("interchain-explorer")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Derives the step-by-step progress of cross-chain token transfers and general \
			 message passing calls.",
		)
		.arg(
			Arg::new("transfer")
				.long("transfer")
				.help("Transaction hash of a token transfer")
				.value_name("TX_HASH"),
		)
		.arg(
			Arg::new("gmp")
				.long("gmp")
				.help("Transaction hash of a general message passing call")
				.value_name("TX_HASH"),
		)
		.arg(
			Arg::new("file")
				.long("file")
				.help("Path to a saved record (or search response) to derive offline")
				.value_name("PATH")
				.requires("kind"),
		)
		.arg(
			Arg::new("kind")
				.long("kind")
				.help("Kind of record in --file")
				.value_parser(["transfer", "gmp"])
				.value_name("KIND"),
		)
		.group(
			ArgGroup::new("target")
				.args(["transfer", "gmp", "file"])
				.required(true),
		)
		.arg(
			Arg::new("type")
				.long("type")
				.help("Transfer type override (deposit_address, wrap, unwrap, erc20_transfer, send_token)")
				.value_name("TYPE"),
		)
		.arg(
			Arg::new("watch")
				.long("watch")
				.help("Keep refreshing until the pipeline settles")
				.action(ArgAction::SetTrue)
				.conflicts_with("file"),
		)
		.arg(
			Arg::new("interval")
				.long("interval")
				.help("Refresh interval in seconds while watching")
				.value_name("SECS")
				.value_parser(clap::value_parser!(u64).range(1..)),
		)
		.arg(
			Arg::new("chains")
				.long("chains")
				.help("Directory of chain definitions (default: config/chains)")
				.value_name("DIR"),
		)
		.arg(
			Arg::new("all")
				.long("all")
				.help("Show pending steps as well")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("json")
				.long("json")
				.help("Print pipelines as JSON on stdout")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
}

fn parse_transfer_type(value: &str) -> anyhow::Result<TransferType> {
	serde_json::from_value(serde_json::Value::String(value.to_string()))
		.map_err(|_| anyhow::anyhow!("Unknown transfer type: {}", value))
}

fn emit(pipeline: &Pipeline, config: &ExplorerConfig, matches: &ArgMatches) {
	if matches.get_flag("json") {
		match serde_json::to_string_pretty(pipeline) {
			Ok(json) => println!("{}", json),
			Err(e) => error!("Failed to serialize pipeline: {}", e),
		}
	} else {
		render_pipeline(pipeline, &config.app_url, matches.get_flag("all"));
	}
}

/// Derives steps from a record saved on disk
#[instrument(skip_all, fields(path = %path.display()))]
fn derive_from_file(
	path: PathBuf,
	kind: &str,
	transfer_type: Option<TransferType>,
	deriver: &StepDeriver<'_, ChainRepository>,
) -> Result<Pipeline> {
	let now = Utc::now();
	let pipeline = match kind {
		"gmp" => {
			let record: GmpRecord = load_record_file(&path)?;
			Pipeline::Gmp {
				hops: deriver.gmp_hops(&record, now, &[]),
				actions: deriver.gmp_actions(&record, now),
			}
		}
		_ => {
			let record: TransferRecord = load_record_file(&path)?;
			Pipeline::Transfer {
				steps: deriver.transfer_steps(&record, transfer_type),
			}
		}
	};
	Ok(pipeline)
}

/// Main entry point for the explorer.
///
/// # Errors
/// Returns an error if configuration, chain loading or the backend query fails.
#[tokio::main]
async fn main() -> Result<()> {
	let matches = cli().get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	setup_logging(matches.get_one::<String>("log-level").map(String::as_str)).unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let mut config = ExplorerConfig::from_env()
		.map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
	if let Some(secs) = matches.get_one::<u64>("interval") {
		config.poll_interval = Duration::from_secs(*secs);
	}

	let transfer_type = matches
		.get_one::<String>("type")
		.map(|value| parse_transfer_type(value))
		.transpose()?;

	let api = initialize_api(&config)
		.map_err(|e| anyhow::anyhow!("Failed to create backend client: {}", e))?;
	let chains_dir = matches.get_one::<String>("chains").map(PathBuf::from);
	let chains = Arc::new(
		initialize_chains(&config, chains_dir.as_deref(), api.as_ref())
			.await
			.map_err(|e| anyhow::anyhow!("Failed to load chains: {}", e))?,
	);

	if let Some(path) = matches.get_one::<String>("file") {
		let kind = matches
			.get_one::<String>("kind")
			.ok_or(anyhow::anyhow!("--kind must be given with --file"))?;
		let deriver = StepDeriver::new(&chains)
			.with_hub_chain(config.hub_chain.clone())
			.with_timings(config.timings);
		let pipeline = derive_from_file(PathBuf::from(path), kind, transfer_type, &deriver)?;
		emit(&pipeline, &config, &matches);
		return Ok(());
	}

	let target = match (
		matches.get_one::<String>("transfer"),
		matches.get_one::<String>("gmp"),
	) {
		(Some(tx_hash), _) => WatchTarget::Transfer(tx_hash.clone()),
		(None, Some(tx_hash)) => WatchTarget::Gmp(tx_hash.clone()),
		(None, None) => return Err(anyhow::anyhow!("No transaction given").into()),
	};

	let watcher = StepWatcher::new(
		api,
		chains,
		WatcherConfig {
			interval: config.poll_interval,
			hub_chain: config.hub_chain.clone(),
			timings: config.timings,
		},
	);

	if !matches.get_flag("watch") {
		let estimates = watcher.estimates(&target).await;
		match watcher.fetch(&target, &estimates).await? {
			Some(pipeline) => emit(&pipeline, &config, &matches),
			None => info!(tx_hash = target.tx_hash(), "Transaction not indexed yet"),
		}
		return Ok(());
	}

	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	tokio::spawn(async move {
		if let Err(e) = tokio::signal::ctrl_c().await {
			error!("Error waiting for Ctrl+C: {}", e);
			return;
		}
		info!("Shutdown signal received, stopping watcher...");
		let _ = shutdown_tx.send(true);
	});

	info!("Watching. Press Ctrl+C to stop");
	let last = watcher
		.watch(&target, |pipeline| emit(pipeline, &config, &matches), shutdown_rx)
		.await;

	if last.is_none() {
		info!(tx_hash = target.tx_hash(), "Transaction was never indexed");
	}

	info!("Shutdown complete");
	Ok(())
}
