//! Manual recovery actions for stuck GMP calls.

use serde::Serialize;

use crate::models::GmpRecord;

use super::gmp::GmpContext;

/// Something an operator can do to push a stuck call forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualAction {
	/// Top up gas so relayers pick the call up
	AddGas,
	/// Submit the approval to the destination gateway
	Approve,
	/// Execute the approved payload on the destination contract
	Execute,
}

impl ManualAction {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::AddGas => "add_gas",
			Self::Approve => "approve",
			Self::Execute => "execute",
		}
	}
}

pub(crate) fn eligible_actions(ctx: &GmpContext<'_>) -> Vec<ManualAction> {
	let record: &GmpRecord = ctx.record;
	let window = ctx.timings.manual_action_window;
	let overdue = |timestamp: Option<i64>| {
		timestamp.is_some_and(|ts| ctx.now.saturating_sub(ts) > window)
	};
	let settled = record.is_cleanly_executed() || record.is_refunded();
	let mut actions = Vec::new();

	if settled || record.call.is_none() {
		return actions;
	}

	if !record.is_gas_paid() && record.proposal_id.is_none() {
		actions.push(ManualAction::AddGas);
	}

	let destination_is_cosmos = ctx.destination.as_ref().is_some_and(|c| c.is_cosmos());
	if record.approved.is_none()
		&& !destination_is_cosmos
		&& ctx.is_confirmed()
		&& overdue(record.confirm.as_ref().and_then(|c| c.block_timestamp))
	{
		actions.push(ManualAction::Approve);
	}

	if let Some(approved) = &record.approved {
		if ctx.is_errored() || overdue(approved.block_timestamp) {
			actions.push(ManualAction::Execute);
		}
	}

	actions
}
