//! Step derivation for general message passing calls.
//!
//! The pipeline is `send → pay_gas → express → confirm → approve → execute →
//! refund`. Time only ever changes titles, except for the execution error
//! grace window which decides when an `error` becomes terminal.

use crate::models::{Chain, GmpRecord, StepData, StepId, StepStatus, StepTimings};

use super::rules::{always, status_of, StepOutcome, StepRule};

pub(crate) struct GmpContext<'a> {
	pub record: &'a GmpRecord,
	pub source: Option<Chain>,
	pub destination: Option<Chain>,
	pub hub: Option<Chain>,
	/// Unix time in seconds
	pub now: i64,
	pub timings: StepTimings,
	/// Estimated seconds from call to confirmation for this chain pair
	pub estimated_confirm_secs: Option<i64>,
}

impl GmpContext<'_> {
	fn elapsed_since(&self, timestamp: Option<i64>) -> Option<i64> {
		timestamp.map(|ts| self.now.saturating_sub(ts))
	}

	fn call_age(&self) -> Option<i64> {
		self.elapsed_since(self.record.call.as_ref().and_then(|c| c.block_timestamp))
	}

	fn source_is_cosmos(&self) -> bool {
		self.source.as_ref().is_some_and(Chain::is_cosmos)
	}

	fn destination_is_evm(&self) -> bool {
		self.destination.as_ref().is_some_and(Chain::is_evm)
	}

	/// Confirmed by a poll that was not later reported as failed
	pub(crate) fn is_confirmed(&self) -> bool {
		let Some(confirm) = self.record.confirm.as_ref() else {
			return false;
		};
		let superseded = self
			.record
			.confirm_failed_event
			.as_ref()
			.is_some_and(|failed| failed.poll_id == confirm.poll_id);
		self.source_is_cosmos() || !superseded
	}

	/// The execution error has outlived the grace window
	pub(crate) fn is_errored(&self) -> bool {
		let record = self.record;
		let Some(error) = record.error.as_ref() else {
			return false;
		};
		let timestamp = error
			.block_timestamp
			.or_else(|| record.approved.as_ref().and_then(|a| a.block_timestamp))
			.or_else(|| record.confirm.as_ref().and_then(|c| c.block_timestamp));
		self.elapsed_since(timestamp)
			.is_some_and(|elapsed| elapsed > self.timings.execute_error_grace)
	}
}

pub(crate) fn gmp_rules<'a>() -> [StepRule<GmpContext<'a>>; 7] {
	[
		StepRule {
			id: StepId::Send,
			include: always,
			resolve: |ctx| {
				let done = ctx.record.call.is_some();
				StepOutcome::new(if done { "Sent" } else { "Send" }, status_of(done))
					.data(ctx.record.call.clone().map(StepData::GmpEvent))
					.chain(ctx.source.as_ref())
			},
		},
		StepRule {
			id: StepId::PayGas,
			include: |ctx| ctx.record.proposal_id.is_none() || ctx.record.is_gas_paid(),
			resolve: resolve_pay_gas,
		},
		StepRule {
			id: StepId::Express,
			include: |ctx| ctx.record.express_executed.is_some(),
			resolve: |ctx| {
				StepOutcome::new("Express Executed", StepStatus::Success)
					.data(ctx.record.express_executed.clone().map(StepData::GmpEvent))
					.chain(ctx.destination.as_ref())
			},
		},
		StepRule {
			id: StepId::Confirm,
			include: |ctx| {
				let record = ctx.record;
				record.confirm.is_some()
					|| record.approved.is_none()
					|| !record.has_execution_outcome()
			},
			resolve: resolve_confirm,
		},
		StepRule {
			id: StepId::Approve,
			include: GmpContext::destination_is_evm,
			resolve: |ctx| {
				let (title, status) = if ctx.record.approved.is_some() {
					("Approved", StepStatus::Success)
				} else if ctx.is_confirmed() {
					("Approving", StepStatus::Pending)
				} else {
					("Approve", StepStatus::Pending)
				};
				StepOutcome::new(title, status)
					.data(ctx.record.approved.clone().map(StepData::GmpEvent))
					.chain(ctx.destination.as_ref())
			},
		},
		StepRule {
			id: StepId::Execute,
			include: always,
			resolve: resolve_execute,
		},
		StepRule {
			id: StepId::Refund,
			include: |ctx| ctx.record.is_refunded(),
			resolve: |ctx| {
				StepOutcome::new("Refunded", StepStatus::Success)
					.data(ctx.record.refunded.clone().map(StepData::GmpRefund))
					.chain(ctx.source.as_ref())
			},
		},
	]
}

fn resolve_pay_gas(ctx: &GmpContext<'_>) -> StepOutcome {
	let record = ctx.record;
	let title = if record.is_gas_paid() {
		"Gas Paid"
	} else if ctx
		.call_age()
		.is_some_and(|age| age < ctx.timings.gas_check_window)
	{
		"Checking Gas Paid"
	} else {
		"Pay Gas"
	};

	let chain = if record.gas_paid.is_none() && record.gas_paid_to_callback.is_some() {
		ctx.destination.as_ref()
	} else {
		ctx.source.as_ref()
	};

	StepOutcome::new(title, status_of(record.is_gas_paid()))
		.data(record.gas_payment().cloned().map(StepData::GmpEvent))
		.chain(chain)
}

fn resolve_confirm(ctx: &GmpContext<'_>) -> StepOutcome {
	let record = ctx.record;
	let (title, status) = if ctx.is_confirmed()
		|| record.approved.is_some()
		|| record.has_execution_outcome()
	{
		("Confirmed", StepStatus::Success)
	} else if record.is_invalid_call {
		("Invalid Call", StepStatus::Failed)
	} else if record.confirm_failed {
		("Failed to Confirm", StepStatus::Failed)
	} else if record.is_gas_paid() || record.express_executed.is_some() {
		// Past the estimate the confirmation is overdue rather than awaiting finality
		let overdue = match (ctx.call_age(), ctx.estimated_confirm_secs) {
			(Some(age), Some(estimate)) => {
				age > estimate.saturating_add(ctx.timings.finality_buffer)
			}
			_ => false,
		};
		if overdue {
			("Confirm", StepStatus::Pending)
		} else {
			("Waiting for Finality", StepStatus::Pending)
		}
	} else {
		("Confirm", StepStatus::Pending)
	};

	StepOutcome::new(title, status)
		.data(
			record
				.confirm
				.clone()
				.or_else(|| record.confirm_failed_event.clone())
				.map(StepData::GmpConfirm),
		)
		.chain(ctx.hub.as_ref())
}

fn resolve_execute(ctx: &GmpContext<'_>) -> StepOutcome {
	let record = ctx.record;
	let relaying_over_ibc = record
		.executed
		.as_ref()
		.is_some_and(|e| e.axelar_transaction_hash.is_some() && e.transaction_hash.is_none());

	let (title, status) = if record.is_cleanly_executed() {
		("Executed", StepStatus::Success)
	} else if ctx.is_errored() {
		("Error", StepStatus::Failed)
	} else if relaying_over_ibc
		&& ctx
			.elapsed_since(record.executed.as_ref().and_then(|e| e.block_timestamp))
			.is_some_and(|elapsed| elapsed > ctx.timings.ibc_wait_window)
	{
		("Waiting for IBC", StepStatus::Pending)
	} else {
		("Execute", StepStatus::Pending)
	};

	let data = if let Some(executed) = &record.executed {
		Some(StepData::GmpEvent(executed.clone()))
	} else if record.is_executed {
		Some(StepData::Executed(true))
	} else {
		record.error.clone().map(StepData::GmpError)
	};

	let chain = if relaying_over_ibc {
		ctx.hub.as_ref()
	} else {
		ctx.destination.as_ref()
	};

	StepOutcome::new(title, status).data(data).chain(chain)
}
