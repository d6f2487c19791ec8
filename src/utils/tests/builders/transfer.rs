//! Test helper utilities for transfer records
//!
//! - `TransferRecordBuilder`: Builder for creating test TransferRecord instances

use crate::models::{
	AxelarTransfer, Erc20Transfer, IbcSend, TransferCommand, TransferConfirm, TransferLink,
	TransferRecord, TransferSend, TransferType, TransferUnwrap, TransferVote, TransferWrap,
};

/// Builder for creating test TransferRecord instances
#[derive(Default)]
pub struct TransferRecordBuilder {
	record: TransferRecord,
}

impl TransferRecordBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn transfer_type(mut self, transfer_type: TransferType) -> Self {
		self.record.transfer_type = Some(transfer_type);
		self
	}

	pub fn send(mut self, source: &str, destination: &str, tx_hash: &str) -> Self {
		self.record.send = Some(TransferSend {
			txhash: Some(tx_hash.to_string()),
			source_chain: Some(source.to_string()),
			destination_chain: Some(destination.to_string()),
			denom: Some("uusdc".to_string()),
			amount: Some(100.0),
			..Default::default()
		});
		self
	}

	pub fn link(mut self, source: &str, destination: &str, deposit_address: &str) -> Self {
		self.record.link = Some(TransferLink {
			txhash: Some("LINK".to_string()),
			deposit_address: Some(deposit_address.to_string()),
			source_chain: Some(source.to_string()),
			destination_chain: Some(destination.to_string()),
			..Default::default()
		});
		self
	}

	pub fn confirm(mut self, tx_hash: &str) -> Self {
		self.record.confirm = Some(TransferConfirm {
			txhash: Some(tx_hash.to_string()),
			..Default::default()
		});
		self
	}

	pub fn vote(mut self, poll_id: &str, success: Option<bool>) -> Self {
		self.record.vote = Some(TransferVote {
			poll_id: Some(poll_id.to_string()),
			success,
			..Default::default()
		});
		self
	}

	pub fn command(mut self, chain: &str, batch_id: &str, transaction_hash: Option<&str>) -> Self {
		self.record.command = Some(TransferCommand {
			chain: Some(chain.to_string()),
			batch_id: Some(batch_id.to_string()),
			transaction_hash: transaction_hash.map(str::to_string),
			..Default::default()
		});
		self
	}

	pub fn ibc_send(mut self, ibc_send: IbcSend) -> Self {
		self.record.ibc_send = Some(ibc_send);
		self
	}

	pub fn axelar_transfer(mut self, tx_hash: &str) -> Self {
		self.record.axelar_transfer = Some(AxelarTransfer {
			txhash: Some(tx_hash.to_string()),
			..Default::default()
		});
		self
	}

	pub fn wrap(mut self, source: &str, tx_hash: &str) -> Self {
		self.record.wrap = Some(TransferWrap {
			tx_hash_wrap: Some(tx_hash.to_string()),
			source_chain: Some(source.to_string()),
			..Default::default()
		});
		self
	}

	pub fn unwrap(mut self, destination: &str, tx_hash: &str) -> Self {
		self.record.unwrap = Some(TransferUnwrap {
			tx_hash_unwrap: Some(tx_hash.to_string()),
			destination_chain: Some(destination.to_string()),
			..Default::default()
		});
		self
	}

	pub fn erc20_transfer(mut self, source: &str, tx_hash: &str) -> Self {
		self.record.erc20_transfer = Some(Erc20Transfer {
			tx_hash_transfer: Some(tx_hash.to_string()),
			source_chain: Some(source.to_string()),
			..Default::default()
		});
		self
	}

	pub fn build(self) -> TransferRecord {
		self.record
	}
}
