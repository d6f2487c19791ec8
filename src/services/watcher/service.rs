//! Poll loop that keeps a transaction's pipeline current.
//!
//! Every tick refetches the record and derives its steps from scratch. The
//! last successful response wins; a failed fetch keeps the previous pipeline
//! and waits for the next tick. The loop ends when the pipeline settles or a
//! shutdown is signalled.

use chrono::Utc;
use serde::Serialize;
use std::{sync::Arc, time::Duration};
use tokio::{sync::watch, time::MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::{
	models::{Step, StepTimings, TimeSpent},
	repositories::{ChainRepositoryTrait, ChainService},
	services::{
		api::ExplorerApi,
		steps::{GmpHops, ManualAction, StepDeriver},
		watcher::WatcherError,
	},
	utils::constants::{DEFAULT_POLL_INTERVAL_SECS, HUB_CHAIN_ID},
};

/// Transaction to follow, by the hash that started it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchTarget {
	Transfer(String),
	Gmp(String),
}

impl WatchTarget {
	pub fn tx_hash(&self) -> &str {
		match self {
			Self::Transfer(tx_hash) | Self::Gmp(tx_hash) => tx_hash,
		}
	}
}

/// Derived view of a watched transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pipeline {
	Transfer {
		steps: Vec<Step>,
	},
	Gmp {
		hops: GmpHops,
		actions: Vec<ManualAction>,
	},
}

fn is_settled(steps: &[Step]) -> bool {
	steps.iter().any(Step::is_failed) || steps.iter().all(Step::is_success)
}

impl Pipeline {
	/// Steps of the transfer, or of the main GMP hop
	pub fn steps(&self) -> &[Step] {
		match self {
			Self::Transfer { steps } => steps,
			Self::Gmp { hops, .. } => &hops.main,
		}
	}

	/// No further change is expected: every step succeeded or one failed
	pub fn is_settled(&self) -> bool {
		match self {
			Self::Transfer { steps } => is_settled(steps),
			Self::Gmp { hops, .. } => {
				is_settled(&hops.main) && hops.callback.as_deref().map_or(true, is_settled)
			}
		}
	}
}

#[derive(Debug, Clone)]
pub struct WatcherConfig {
	pub interval: Duration,
	pub hub_chain: String,
	pub timings: StepTimings,
}

impl Default for WatcherConfig {
	fn default() -> Self {
		Self {
			interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
			hub_chain: HUB_CHAIN_ID.to_string(),
			timings: StepTimings::default(),
		}
	}
}

pub struct StepWatcher<A: ExplorerApi, T: ChainRepositoryTrait> {
	api: Arc<A>,
	chains: Arc<ChainService<T>>,
	config: WatcherConfig,
}

impl<A: ExplorerApi, T: ChainRepositoryTrait> StepWatcher<A, T> {
	pub fn new(api: Arc<A>, chains: Arc<ChainService<T>>, config: WatcherConfig) -> Self {
		Self {
			api,
			chains,
			config,
		}
	}

	fn deriver(&self) -> StepDeriver<'_, T> {
		StepDeriver::new(&self.chains)
			.with_hub_chain(self.config.hub_chain.clone())
			.with_timings(self.config.timings)
	}

	/// Time estimates for GMP titles; unavailable estimates are not an error
	pub async fn estimates(&self, target: &WatchTarget) -> Vec<TimeSpent> {
		match target {
			WatchTarget::Transfer(_) => Vec::new(),
			WatchTarget::Gmp(_) => self.api.get_time_spents().await.unwrap_or_else(|e| {
				warn!(error = %e, "Time estimates unavailable");
				Vec::new()
			}),
		}
	}

	/// Fetches the record once and derives its pipeline.
	///
	/// `Ok(None)` means the indexer has not seen the transaction yet.
	pub async fn fetch(
		&self,
		target: &WatchTarget,
		estimates: &[TimeSpent],
	) -> Result<Option<Pipeline>, WatcherError> {
		let now = Utc::now();
		let deriver = self.deriver();

		let pipeline = match target {
			WatchTarget::Transfer(tx_hash) => self
				.api
				.get_transfer(tx_hash)
				.await?
				.map(|record| Pipeline::Transfer {
					steps: deriver.transfer_steps(&record, None),
				}),
			WatchTarget::Gmp(tx_hash) => {
				self.api.get_gmp(tx_hash).await?.map(|record| Pipeline::Gmp {
					hops: deriver.gmp_hops(&record, now, estimates),
					actions: deriver.gmp_actions(&record, now),
				})
			}
		};
		Ok(pipeline)
	}

	/// Polls until the pipeline settles or `shutdown_rx` flips to `true`.
	///
	/// `on_update` sees every freshly derived pipeline. Returns the last one.
	pub async fn watch<F>(
		&self,
		target: &WatchTarget,
		mut on_update: F,
		mut shutdown_rx: watch::Receiver<bool>,
	) -> Option<Pipeline>
	where
		F: FnMut(&Pipeline),
	{
		let estimates = self.estimates(target).await;
		let mut ticker = tokio::time::interval(self.config.interval);
		ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
		let mut latest = None;

		info!(
			tx_hash = target.tx_hash(),
			interval_secs = self.config.interval.as_secs_f64(),
			"Watching transaction"
		);

		loop {
			tokio::select! {
				_ = ticker.tick() => {
					match self.fetch(target, &estimates).await {
						Ok(Some(pipeline)) => {
							on_update(&pipeline);
							let settled = pipeline.is_settled();
							latest = Some(pipeline);
							if settled {
								info!(tx_hash = target.tx_hash(), "Pipeline settled");
								break;
							}
						}
						Ok(None) => debug!(tx_hash = target.tx_hash(), "Not indexed yet"),
						Err(e) => warn!(error = %e, "Fetch failed, keeping previous steps"),
					}
				}
				changed = shutdown_rx.changed() => {
					if changed.is_err() || *shutdown_rx.borrow() {
						info!(tx_hash = target.tx_hash(), "Watcher shutting down");
						break;
					}
				}
			}
		}

		latest
	}
}
