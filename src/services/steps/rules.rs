//! Ordered decision tables shared by the transfer and GMP derivers.
//!
//! A pipeline is a fixed list of rules. Each rule decides whether its step
//! applies to the record and, if so, what it looks like. Rules are evaluated
//! in table order, so data can only remove steps, never reorder them.

use crate::models::{Chain, Step, StepData, StepId, StepStatus};

/// What a rule resolved for its step
pub(crate) struct StepOutcome {
	pub title: &'static str,
	pub status: StepStatus,
	pub data: Option<StepData>,
	pub chain: Option<Chain>,
}

impl StepOutcome {
	pub fn new(title: &'static str, status: StepStatus) -> Self {
		Self {
			title,
			status,
			data: None,
			chain: None,
		}
	}

	pub fn data(mut self, data: Option<StepData>) -> Self {
		self.data = data;
		self
	}

	pub fn chain(mut self, chain: Option<&Chain>) -> Self {
		self.chain = chain.cloned();
		self
	}
}

pub(crate) struct StepRule<C> {
	pub id: StepId,
	pub include: fn(&C) -> bool,
	pub resolve: fn(&C) -> StepOutcome,
}

/// Picks `success` or `pending` from a presence check
pub(crate) fn status_of(done: bool) -> StepStatus {
	if done {
		StepStatus::Success
	} else {
		StepStatus::Pending
	}
}

pub(crate) fn always<C>(_: &C) -> bool {
	true
}

pub(crate) fn apply<C>(rules: &[StepRule<C>], context: &C) -> Vec<Step> {
	rules
		.iter()
		.filter(|rule| (rule.include)(context))
		.map(|rule| {
			let outcome = (rule.resolve)(context);
			Step {
				id: rule.id,
				title: outcome.title.to_string(),
				status: outcome.status,
				data: outcome.data,
				chain: outcome.chain,
			}
		})
		.collect()
}
