//! Test helper utilities for GMP records
//!
//! - `GmpRecordBuilder`: Builder for creating test GmpRecord instances

use crate::models::{
	CallReturnValues, ErrorDetail, GmpConfirm, GmpError, GmpEvent, GmpRecord, GmpRefund, Receipt,
};
use serde_json::json;

fn event(chain: Option<&str>, tx_hash: &str, timestamp: i64) -> GmpEvent {
	GmpEvent {
		chain: chain.map(str::to_string),
		transaction_hash: Some(tx_hash.to_string()),
		block_timestamp: Some(timestamp),
		..Default::default()
	}
}

/// Builder for creating test GmpRecord instances
///
/// Events after `call` are attached to the chain of the hop they happen on.
#[derive(Default)]
pub struct GmpRecordBuilder {
	record: GmpRecord,
}

impl GmpRecordBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn call(mut self, source: &str, destination: &str, tx_hash: &str, timestamp: i64) -> Self {
		let mut call = event(Some(source), tx_hash, timestamp);
		call.event = Some("ContractCall".to_string());
		call.return_values = Some(CallReturnValues {
			destination_chain: Some(destination.to_string()),
			source_chain: Some(source.to_string()),
			..Default::default()
		});
		self.record.call = Some(call);
		self
	}

	fn source(&self) -> Option<String> {
		self.record.source_chain().map(str::to_string)
	}

	fn destination(&self) -> Option<String> {
		self.record.destination_chain().map(str::to_string)
	}

	pub fn gas_paid(mut self, tx_hash: &str, timestamp: i64) -> Self {
		let source = self.source();
		self.record.gas_paid = Some(event(source.as_deref(), tx_hash, timestamp));
		self
	}

	pub fn gas_paid_to_callback(mut self, tx_hash: &str, timestamp: i64) -> Self {
		let destination = self.destination();
		self.record.gas_paid_to_callback = Some(event(destination.as_deref(), tx_hash, timestamp));
		self
	}

	pub fn express(mut self, tx_hash: &str, timestamp: i64) -> Self {
		let destination = self.destination();
		self.record.express_executed = Some(event(destination.as_deref(), tx_hash, timestamp));
		self
	}

	pub fn confirm(mut self, tx_hash: &str, poll_id: Option<&str>, timestamp: i64) -> Self {
		self.record.confirm = Some(GmpConfirm {
			txhash: Some(tx_hash.to_string()),
			poll_id: poll_id.map(str::to_string),
			source_chain: self.source(),
			block_timestamp: Some(timestamp),
			..Default::default()
		});
		self
	}

	pub fn confirm_failed(mut self, tx_hash: &str, poll_id: Option<&str>, timestamp: i64) -> Self {
		self.record.confirm_failed = true;
		self.record.confirm_failed_event = Some(GmpConfirm {
			txhash: Some(tx_hash.to_string()),
			poll_id: poll_id.map(str::to_string),
			source_chain: self.source(),
			block_timestamp: Some(timestamp),
			..Default::default()
		});
		self
	}

	pub fn approved(mut self, tx_hash: &str, timestamp: i64) -> Self {
		let destination = self.destination();
		self.record.approved = Some(event(destination.as_deref(), tx_hash, timestamp));
		self
	}

	pub fn executed(mut self, tx_hash: &str, timestamp: i64) -> Self {
		let destination = self.destination();
		self.record.executed = Some(event(destination.as_deref(), tx_hash, timestamp));
		self
	}

	/// Execution that so far only happened on the hub
	pub fn executed_on_hub(mut self, axelar_tx_hash: &str, timestamp: i64) -> Self {
		self.record.executed = Some(GmpEvent {
			chain: self.destination(),
			axelar_transaction_hash: Some(axelar_tx_hash.to_string()),
			block_timestamp: Some(timestamp),
			..Default::default()
		});
		self
	}

	pub fn error(mut self, tx_hash: &str, timestamp: i64) -> Self {
		self.record.error = Some(GmpError {
			chain: self.destination(),
			transaction_hash: Some(tx_hash.to_string()),
			block_timestamp: Some(timestamp),
			error: Some(ErrorDetail {
				message: Some("execution reverted".to_string()),
				..Default::default()
			}),
		});
		self
	}

	pub fn refunded(mut self, tx_hash: &str, succeeded: bool, timestamp: i64) -> Self {
		self.record.refunded = Some(GmpRefund {
			chain: self.source(),
			transaction_hash: Some(tx_hash.to_string()),
			block_timestamp: Some(timestamp),
			receipt: Some(Receipt {
				status: Some(json!(u8::from(succeeded))),
			}),
		});
		self
	}

	pub fn is_executed(mut self, is_executed: bool) -> Self {
		self.record.is_executed = is_executed;
		self
	}

	pub fn invalid_call(mut self, is_invalid_call: bool) -> Self {
		self.record.is_invalid_call = is_invalid_call;
		self
	}

	pub fn proposal(mut self, proposal_id: &str) -> Self {
		self.record.proposal_id = Some(proposal_id.to_string());
		self
	}

	pub fn callback(mut self, callback: GmpRecord) -> Self {
		self.record.callback_data = Some(Box::new(callback));
		self
	}

	pub fn origin(mut self, origin: GmpRecord) -> Self {
		self.record.origin_data = Some(Box::new(origin));
		self
	}

	pub fn build(self) -> GmpRecord {
		self.record
	}
}
