//! Step derivation for cross-chain records.
//!
//! Turns the sub-events the indexer has observed for a transfer or a GMP
//! call into an ordered pipeline of [`Step`]s. Derivation is pure: the same
//! record, registry and clock always produce the same steps, and missing data
//! only ever yields `pending` steps.

mod actions;
mod gmp;
mod links;
mod rules;
mod transfer;

pub use actions::ManualAction;
pub use links::{batch_path, poll_path, step_link};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{
	models::{Chain, GmpRecord, Step, StepTimings, TimeSpent, TransferRecord, TransferType},
	repositories::{ChainRepositoryTrait, ChainService},
	utils::constants::HUB_CHAIN_ID,
};

use self::{gmp::GmpContext, transfer::TransferContext};

/// Keeps the steps worth showing, see [`Step::is_displayed`]
pub fn displayed_steps(steps: &[Step]) -> Vec<Step> {
	steps.iter().filter(|step| step.is_displayed()).cloned().collect()
}

/// Chain ids along a multihop GMP route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HopPath {
	pub source: Option<String>,
	pub intermediate: Option<String>,
	pub destination: Option<String>,
}

impl HopPath {
	/// Derives the route `origin source → main source → callback destination`,
	/// falling back to the main call's own chains for a missing hop
	pub fn from_record(record: &GmpRecord) -> Self {
		let origin = record.origin_data.as_deref();
		let callback = record.callback_data.as_deref();

		let source = origin
			.and_then(GmpRecord::source_chain)
			.or_else(|| record.source_chain());
		let intermediate = if origin.is_some() {
			record.source_chain()
		} else {
			record.destination_chain()
		};
		let destination = callback
			.and_then(GmpRecord::destination_chain)
			.or_else(|| record.destination_chain());

		Self {
			source: source.map(str::to_string),
			intermediate: intermediate.map(str::to_string),
			destination: destination.map(str::to_string),
		}
	}
}

/// Parallel pipelines for a GMP call and the hops chained to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GmpHops {
	pub origin: Option<Vec<Step>>,
	pub main: Vec<Step>,
	pub callback: Option<Vec<Step>>,
	/// Present only when the call is part of a multihop route
	pub path: Option<HopPath>,
}

/// Derives step pipelines against a chain registry
pub struct StepDeriver<'a, T: ChainRepositoryTrait> {
	chains: &'a ChainService<T>,
	hub_chain: String,
	timings: StepTimings,
}

impl<'a, T: ChainRepositoryTrait> StepDeriver<'a, T> {
	pub fn new(chains: &'a ChainService<T>) -> Self {
		Self {
			chains,
			hub_chain: HUB_CHAIN_ID.to_string(),
			timings: StepTimings::default(),
		}
	}

	pub fn with_hub_chain(mut self, hub_chain: impl Into<String>) -> Self {
		self.hub_chain = hub_chain.into();
		self
	}

	pub fn with_timings(mut self, timings: StepTimings) -> Self {
		self.timings = timings;
		self
	}

	pub fn timings(&self) -> &StepTimings {
		&self.timings
	}

	fn hub(&self) -> Option<Chain> {
		self.chains.get(&self.hub_chain)
	}

	fn is_hub(&self, key: Option<&str>, chain: Option<&Chain>) -> bool {
		match (chain, key) {
			(Some(chain), _) => chain.id.eq_ignore_ascii_case(&self.hub_chain),
			(None, Some(key)) => key.trim().eq_ignore_ascii_case(&self.hub_chain),
			(None, None) => false,
		}
	}

	/// Steps of a token transfer.
	///
	/// `transfer_type` overrides the record's own tag; without either the type
	/// is inferred from which sub-events are present.
	pub fn transfer_steps(
		&self,
		record: &TransferRecord,
		transfer_type: Option<TransferType>,
	) -> Vec<Step> {
		let source = self.chains.resolve(record.source_chain());
		let destination = self.chains.resolve(record.destination_chain());
		let destination_is_hub = self.is_hub(record.destination_chain(), destination.as_ref());

		let context = TransferContext {
			record,
			transfer_type: transfer_type.or_else(|| record.resolved_type()),
			source,
			destination,
			hub: self.hub(),
			destination_is_hub,
		};
		let steps = rules::apply(&transfer::transfer_rules(), &context);

		debug!(
			tx_hash = record.tx_hash().unwrap_or_default(),
			transfer_type = ?context.transfer_type,
			steps = steps.len(),
			"Derived transfer steps"
		);
		steps
	}

	fn gmp_context<'r>(
		&self,
		record: &'r GmpRecord,
		now: DateTime<Utc>,
		estimates: &[TimeSpent],
	) -> GmpContext<'r> {
		let estimated_confirm_secs = match (record.source_chain(), record.destination_chain()) {
			(Some(source), Some(destination)) => {
				TimeSpent::lookup(estimates, source, destination).and_then(TimeSpent::confirm_secs)
			}
			_ => None,
		};

		GmpContext {
			record,
			source: self.chains.resolve(record.source_chain()),
			destination: self.chains.resolve(record.destination_chain()),
			hub: self.hub(),
			now: now.timestamp(),
			timings: self.timings,
			estimated_confirm_secs,
		}
	}

	/// Steps of a single GMP hop.
	///
	/// `estimates` only influence titles; pass an empty slice when unknown.
	pub fn gmp_steps(
		&self,
		record: &GmpRecord,
		now: DateTime<Utc>,
		estimates: &[TimeSpent],
	) -> Vec<Step> {
		let context = self.gmp_context(record, now, estimates);
		let steps = rules::apply(&gmp::gmp_rules(), &context);

		debug!(
			tx_hash = record.tx_hash().unwrap_or_default(),
			steps = steps.len(),
			"Derived GMP steps"
		);
		steps
	}

	/// Steps of a GMP call and of its origin and callback hops, if any
	pub fn gmp_hops(
		&self,
		record: &GmpRecord,
		now: DateTime<Utc>,
		estimates: &[TimeSpent],
	) -> GmpHops {
		let derive = |hop: &GmpRecord| self.gmp_steps(hop, now, estimates);

		GmpHops {
			origin: record.origin_data.as_deref().map(derive),
			main: derive(record),
			callback: record.callback_data.as_deref().map(derive),
			path: record.is_multihop().then(|| HopPath::from_record(record)),
		}
	}

	/// Recovery actions an operator could take on a stuck GMP call
	pub fn gmp_actions(&self, record: &GmpRecord, now: DateTime<Utc>) -> Vec<ManualAction> {
		actions::eligible_actions(&self.gmp_context(record, now, &[]))
	}
}
