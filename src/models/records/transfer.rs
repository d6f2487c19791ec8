//! Token transfer records as returned by `searchTransfers`.
//!
//! A transfer is a bag of sub-events keyed by their role in the lifecycle.
//! Any of them may be missing while the transfer is in flight.

use serde::{Deserialize, Serialize};

use super::de::string_or_number;

/// How the transfer was initiated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
	/// Tokens sent to a linked deposit address
	DepositAddress,
	/// Native tokens wrapped before being deposited
	Wrap,
	/// Tokens unwrapped to native on the destination chain
	Unwrap,
	/// ERC20 transfer into a deposit address
	Erc20Transfer,
	/// `sendToken` call on a gateway contract
	SendToken,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferSend {
	pub txhash: Option<String>,
	pub height: Option<u64>,
	pub status: Option<String>,
	pub source_chain: Option<String>,
	pub destination_chain: Option<String>,
	pub original_source_chain: Option<String>,
	pub original_destination_chain: Option<String>,
	pub sender_address: Option<String>,
	pub recipient_address: Option<String>,
	pub denom: Option<String>,
	pub amount: Option<f64>,
	pub block_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferLink {
	pub txhash: Option<String>,
	pub height: Option<u64>,
	pub deposit_address: Option<String>,
	pub source_chain: Option<String>,
	pub destination_chain: Option<String>,
	pub original_source_chain: Option<String>,
	pub original_destination_chain: Option<String>,
	pub sender_address: Option<String>,
	pub recipient_address: Option<String>,
	pub denom: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferConfirm {
	pub txhash: Option<String>,
	pub height: Option<u64>,
	#[serde(deserialize_with = "string_or_number")]
	pub poll_id: Option<String>,
	pub transfer_id: Option<u64>,
	pub deposit_address: Option<String>,
}

/// Validator poll outcome for an EVM-sourced deposit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferVote {
	pub txhash: Option<String>,
	pub height: Option<u64>,
	#[serde(deserialize_with = "string_or_number")]
	pub poll_id: Option<String>,
	#[serde(rename = "transactionHash")]
	pub transaction_hash: Option<String>,
	pub success: Option<bool>,
	pub transfer_id: Option<u64>,
}

/// Signed command releasing tokens on an EVM destination
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferCommand {
	pub chain: Option<String>,
	pub command_id: Option<String>,
	#[serde(deserialize_with = "string_or_number")]
	pub batch_id: Option<String>,
	#[serde(rename = "transactionHash")]
	pub transaction_hash: Option<String>,
	pub executed: Option<bool>,
	pub transfer_id: Option<u64>,
}

/// IBC packet carrying the tokens to a Cosmos destination
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IbcSend {
	pub txhash: Option<String>,
	pub ack_txhash: Option<String>,
	pub recv_txhash: Option<String>,
	pub failed_txhash: Option<String>,
	pub sequence: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AxelarTransfer {
	pub txhash: Option<String>,
	pub height: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferWrap {
	pub txhash: Option<String>,
	pub tx_hash_wrap: Option<String>,
	pub source_chain: Option<String>,
	pub deposit_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferUnwrap {
	pub txhash: Option<String>,
	pub tx_hash_unwrap: Option<String>,
	pub destination_chain: Option<String>,
	pub deposit_address_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Erc20Transfer {
	pub txhash: Option<String>,
	pub tx_hash_transfer: Option<String>,
	pub source_chain: Option<String>,
}

/// A cross-chain token transfer and everything observed about it so far
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferRecord {
	#[serde(rename = "type")]
	pub transfer_type: Option<TransferType>,
	pub send: Option<TransferSend>,
	pub link: Option<TransferLink>,
	pub confirm: Option<TransferConfirm>,
	pub vote: Option<TransferVote>,
	pub command: Option<TransferCommand>,
	pub ibc_send: Option<IbcSend>,
	pub axelar_transfer: Option<AxelarTransfer>,
	pub wrap: Option<TransferWrap>,
	pub unwrap: Option<TransferUnwrap>,
	pub erc20_transfer: Option<Erc20Transfer>,
}

impl TransferRecord {
	/// Transfer type from the explicit tag, else inferred from which sub-events exist
	pub fn resolved_type(&self) -> Option<TransferType> {
		self.transfer_type.or_else(|| self.inferred_type())
	}

	fn inferred_type(&self) -> Option<TransferType> {
		if self.wrap.is_some() {
			Some(TransferType::Wrap)
		} else if self.unwrap.is_some() {
			Some(TransferType::Unwrap)
		} else if self.erc20_transfer.is_some() {
			Some(TransferType::Erc20Transfer)
		} else if self
			.link
			.as_ref()
			.is_some_and(|link| link.deposit_address.is_some())
		{
			Some(TransferType::DepositAddress)
		} else {
			None
		}
	}

	/// Source chain, preferring the original chain when a wrap hides it
	pub fn source_chain(&self) -> Option<&str> {
		let send = self.send.as_ref();
		let link = self.link.as_ref();
		send.and_then(|s| s.original_source_chain.as_deref())
			.or_else(|| link.and_then(|l| l.original_source_chain.as_deref()))
			.or_else(|| send.and_then(|s| s.source_chain.as_deref()))
			.or_else(|| link.and_then(|l| l.source_chain.as_deref()))
			.or_else(|| self.wrap.as_ref().and_then(|w| w.source_chain.as_deref()))
			.or_else(|| {
				self.erc20_transfer
					.as_ref()
					.and_then(|e| e.source_chain.as_deref())
			})
	}

	/// Destination chain, preferring the original chain when an unwrap hides it
	pub fn destination_chain(&self) -> Option<&str> {
		let send = self.send.as_ref();
		let link = self.link.as_ref();
		send.and_then(|s| s.original_destination_chain.as_deref())
			.or_else(|| link.and_then(|l| l.original_destination_chain.as_deref()))
			.or_else(|| send.and_then(|s| s.destination_chain.as_deref()))
			.or_else(|| link.and_then(|l| l.destination_chain.as_deref()))
			.or_else(|| {
				self.unwrap
					.as_ref()
					.and_then(|u| u.destination_chain.as_deref())
			})
	}

	/// Natural key of the record: the hash of the transaction that started it
	pub fn tx_hash(&self) -> Option<&str> {
		self.send
			.as_ref()
			.and_then(|s| s.txhash.as_deref())
			.or_else(|| self.wrap.as_ref().and_then(|w| w.tx_hash_wrap.as_deref()))
			.or_else(|| {
				self.erc20_transfer
					.as_ref()
					.and_then(|e| e.tx_hash_transfer.as_deref())
			})
			.or_else(|| self.link.as_ref().and_then(|l| l.txhash.as_deref()))
	}
}
