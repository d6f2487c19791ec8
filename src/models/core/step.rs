use serde::Serialize;
use std::fmt;

use crate::models::{
	core::chain::Chain,
	records::{
		AxelarTransfer, Erc20Transfer, GmpConfirm, GmpError, GmpEvent, GmpRefund, IbcSend,
		TransferCommand, TransferConfirm, TransferLink, TransferSend, TransferUnwrap, TransferVote,
		TransferWrap,
	},
};

/// Identifier of a step in a transfer or GMP pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
	Link,
	Send,
	Wrap,
	Erc20Transfer,
	Confirm,
	Vote,
	Command,
	IbcSend,
	AxelarTransfer,
	Unwrap,
	PayGas,
	Express,
	Approve,
	Execute,
	Refund,
}

impl StepId {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Link => "link",
			Self::Send => "send",
			Self::Wrap => "wrap",
			Self::Erc20Transfer => "erc20_transfer",
			Self::Confirm => "confirm",
			Self::Vote => "vote",
			Self::Command => "command",
			Self::IbcSend => "ibc_send",
			Self::AxelarTransfer => "axelar_transfer",
			Self::Unwrap => "unwrap",
			Self::PayGas => "pay_gas",
			Self::Express => "express",
			Self::Approve => "approve",
			Self::Execute => "execute",
			Self::Refund => "refund",
		}
	}
}

impl fmt::Display for StepId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
	Success,
	Pending,
	Failed,
}

impl fmt::Display for StepStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Success => "success",
			Self::Pending => "pending",
			Self::Failed => "failed",
		})
	}
}

/// The sub-event a step was derived from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepData {
	Link(TransferLink),
	Send(TransferSend),
	Wrap(TransferWrap),
	Erc20Transfer(Erc20Transfer),
	Confirm(TransferConfirm),
	Vote(TransferVote),
	Command(TransferCommand),
	IbcSend(IbcSend),
	AxelarTransfer(AxelarTransfer),
	Unwrap(TransferUnwrap),
	GmpEvent(GmpEvent),
	GmpConfirm(GmpConfirm),
	GmpError(GmpError),
	GmpRefund(GmpRefund),
	/// Execution reported by flag only, with no event attached
	Executed(bool),
}

/// One entry of a derived pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
	pub id: StepId,
	pub title: String,
	pub status: StepStatus,
	pub data: Option<StepData>,
	/// Chain the step happens on; `None` when the registry does not know it
	pub chain: Option<Chain>,
}

impl Step {
	pub fn is_success(&self) -> bool {
		self.status == StepStatus::Success
	}

	pub fn is_pending(&self) -> bool {
		self.status == StepStatus::Pending
	}

	pub fn is_failed(&self) -> bool {
		self.status == StepStatus::Failed
	}

	/// Whether the step is worth showing: anything settled, plus an IBC
	/// packet that has been observed but not yet acknowledged.
	pub fn is_displayed(&self) -> bool {
		!self.is_pending() || (self.id == StepId::IbcSend && self.data.is_some())
	}
}

/// Transaction hash and link for a step, when one can be resolved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepLink {
	pub tx_hash: Option<String>,
	pub url: Option<String>,
}

impl StepLink {
	pub fn is_empty(&self) -> bool {
		self.tx_hash.is_none() && self.url.is_none()
	}
}
