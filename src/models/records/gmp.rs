//! General message passing records as returned by `searchGMP`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::{is_truthy, string_or_number};

/// Arguments of the `ContractCall` event emitted by the source gateway
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallReturnValues {
	pub sender: Option<String>,
	pub destination_chain: Option<String>,
	pub destination_contract_address: Option<String>,
	pub payload_hash: Option<String>,
	pub command_id: Option<String>,
	pub source_chain: Option<String>,
}

/// On-chain event observed for a GMP call (call, gas payment, approval,
/// execution, express execution)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GmpEvent {
	pub chain: Option<String>,
	#[serde(rename = "transactionHash")]
	pub transaction_hash: Option<String>,
	/// Set when execution happened on the hub and still has to be relayed over IBC
	#[serde(rename = "axelarTransactionHash")]
	pub axelar_transaction_hash: Option<String>,
	#[serde(rename = "blockNumber")]
	pub block_number: Option<u64>,
	#[serde(rename = "logIndex")]
	pub log_index: Option<u64>,
	pub block_timestamp: Option<i64>,
	pub event: Option<String>,
	#[serde(rename = "returnValues")]
	pub return_values: Option<CallReturnValues>,
}

/// Hub-side confirmation of the source event
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GmpConfirm {
	pub txhash: Option<String>,
	pub height: Option<u64>,
	#[serde(deserialize_with = "string_or_number")]
	pub poll_id: Option<String>,
	#[serde(rename = "sourceChain")]
	pub source_chain: Option<String>,
	pub block_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ErrorDetail {
	pub message: Option<String>,
	pub reason: Option<String>,
	pub code: Option<Value>,
}

/// Failed execution attempt on the destination chain
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GmpError {
	pub chain: Option<String>,
	#[serde(rename = "transactionHash")]
	pub transaction_hash: Option<String>,
	pub block_timestamp: Option<i64>,
	pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Receipt {
	pub status: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GmpRefund {
	pub chain: Option<String>,
	#[serde(rename = "transactionHash")]
	pub transaction_hash: Option<String>,
	pub block_timestamp: Option<i64>,
	pub receipt: Option<Receipt>,
}

impl GmpRefund {
	/// Whether the refund transaction landed successfully
	pub fn succeeded(&self) -> bool {
		self.receipt
			.as_ref()
			.and_then(|r| r.status.as_ref())
			.is_some_and(is_truthy)
	}
}

/// A general message passing call and everything observed about it so far
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GmpRecord {
	pub call: Option<GmpEvent>,
	pub gas_paid: Option<GmpEvent>,
	pub gas_paid_to_callback: Option<GmpEvent>,
	pub express_executed: Option<GmpEvent>,
	pub confirm: Option<GmpConfirm>,
	pub confirm_failed: bool,
	pub confirm_failed_event: Option<GmpConfirm>,
	pub approved: Option<GmpEvent>,
	pub executed: Option<GmpEvent>,
	pub error: Option<GmpError>,
	pub refunded: Option<GmpRefund>,
	pub is_executed: bool,
	pub is_invalid_call: bool,
	#[serde(deserialize_with = "string_or_number")]
	pub proposal_id: Option<String>,
	#[serde(rename = "originData")]
	pub origin_data: Option<Box<GmpRecord>>,
	#[serde(rename = "callbackData")]
	pub callback_data: Option<Box<GmpRecord>>,
}

impl GmpRecord {
	pub fn source_chain(&self) -> Option<&str> {
		self.call.as_ref().and_then(|c| c.chain.as_deref())
	}

	pub fn destination_chain(&self) -> Option<&str> {
		self.call
			.as_ref()
			.and_then(|c| c.return_values.as_ref())
			.and_then(|r| r.destination_chain.as_deref())
	}

	/// Gas payment on the source chain, or to the callback on the destination
	pub fn gas_payment(&self) -> Option<&GmpEvent> {
		self.gas_paid
			.as_ref()
			.or(self.gas_paid_to_callback.as_ref())
	}

	pub fn is_gas_paid(&self) -> bool {
		self.gas_payment().is_some()
	}

	/// Executed on the destination, not merely on the hub awaiting IBC relay
	pub fn is_cleanly_executed(&self) -> bool {
		self.is_executed
			|| self.executed.as_ref().is_some_and(|executed| {
				executed.axelar_transaction_hash.is_none() || executed.transaction_hash.is_some()
			})
	}

	pub fn has_execution_outcome(&self) -> bool {
		self.executed.is_some() || self.is_executed || self.error.is_some()
	}

	pub fn is_refunded(&self) -> bool {
		self.refunded.as_ref().is_some_and(GmpRefund::succeeded)
	}

	pub fn tx_hash(&self) -> Option<&str> {
		self.call
			.as_ref()
			.and_then(|c| c.transaction_hash.as_deref())
	}

	pub fn is_multihop(&self) -> bool {
		self.origin_data.is_some() || self.callback_data.is_some()
	}
}
