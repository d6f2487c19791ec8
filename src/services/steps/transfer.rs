//! Step derivation for token transfers.
//!
//! | step              | included when                                      |
//! |-------------------|----------------------------------------------------|
//! | `link`            | deposit address transfer with a link               |
//! | `send`            | always                                             |
//! | `wrap`            | wrap transfer                                      |
//! | `erc20_transfer`  | ERC20 transfer                                     |
//! | `confirm`         | not `send_token`, wrap or ERC20 transfer           |
//! | `vote`            | source chain is EVM                                |
//! | `command`         | destination chain is EVM                           |
//! | `ibc_send`        | destination chain is Cosmos and not the hub        |
//! | `axelar_transfer` | destination chain is the hub                       |
//! | `unwrap`          | unwrap transfer                                    |

use crate::models::{
	Chain, StepData, StepId, StepStatus, TransferRecord, TransferType, TransferVote,
};

use super::rules::{always, status_of, StepOutcome, StepRule};

pub(crate) struct TransferContext<'a> {
	pub record: &'a TransferRecord,
	pub transfer_type: Option<TransferType>,
	pub source: Option<Chain>,
	pub destination: Option<Chain>,
	pub hub: Option<Chain>,
	pub destination_is_hub: bool,
}

impl TransferContext<'_> {
	fn is_type(&self, transfer_type: TransferType) -> bool {
		self.transfer_type == Some(transfer_type)
	}

	fn source_is_evm(&self) -> bool {
		self.source.as_ref().is_some_and(Chain::is_evm)
	}

	fn destination_is_evm(&self) -> bool {
		self.destination.as_ref().is_some_and(Chain::is_evm)
	}

	fn destination_is_cosmos(&self) -> bool {
		self.destination.as_ref().is_some_and(Chain::is_cosmos)
	}

	fn hub(&self) -> Option<&Chain> {
		self.hub.as_ref()
	}
}

pub(crate) fn transfer_rules<'a>() -> [StepRule<TransferContext<'a>>; 10] {
	[
		StepRule {
			id: StepId::Link,
			include: |ctx| ctx.is_type(TransferType::DepositAddress) && ctx.record.link.is_some(),
			resolve: |ctx| {
				StepOutcome::new("Linked", StepStatus::Success)
					.data(ctx.record.link.clone().map(StepData::Link))
					.chain(ctx.hub())
			},
		},
		StepRule {
			id: StepId::Send,
			include: always,
			resolve: resolve_send,
		},
		StepRule {
			id: StepId::Wrap,
			include: |ctx| ctx.is_type(TransferType::Wrap),
			resolve: |ctx| {
				let done = ctx.record.send.is_some();
				StepOutcome::new(if done { "Wrapped" } else { "Wrap" }, status_of(done))
					.data(ctx.record.send.clone().map(StepData::Send))
					.chain(ctx.source.as_ref())
			},
		},
		StepRule {
			id: StepId::Erc20Transfer,
			include: |ctx| ctx.is_type(TransferType::Erc20Transfer),
			resolve: |ctx| {
				let done = ctx.record.send.is_some();
				StepOutcome::new(
					if done {
						"ERC20 Transferred"
					} else {
						"ERC20 Transfer"
					},
					status_of(done),
				)
				.data(ctx.record.send.clone().map(StepData::Send))
				.chain(ctx.source.as_ref())
			},
		},
		StepRule {
			id: StepId::Confirm,
			include: |ctx| {
				!matches!(
					ctx.transfer_type,
					Some(TransferType::SendToken | TransferType::Wrap | TransferType::Erc20Transfer)
				)
			},
			resolve: |ctx| {
				let done = ctx.record.confirm.is_some();
				StepOutcome::new(if done { "Confirmed" } else { "Confirm" }, status_of(done))
					.data(ctx.record.confirm.clone().map(StepData::Confirm))
					.chain(ctx.hub())
			},
		},
		StepRule {
			id: StepId::Vote,
			include: TransferContext::source_is_evm,
			resolve: |ctx| {
				let status = vote_status(ctx.record.vote.as_ref());
				let title = match status {
					StepStatus::Success => "Approved",
					StepStatus::Failed => "Failed",
					StepStatus::Pending => "Approve",
				};
				StepOutcome::new(title, status)
					.data(ctx.record.vote.clone().map(StepData::Vote))
					.chain(ctx.hub())
			},
		},
		StepRule {
			id: StepId::Command,
			include: TransferContext::destination_is_evm,
			resolve: |ctx| {
				let done = ctx.record.command.as_ref().is_some_and(|command| {
					command.executed.unwrap_or(false) || command.transaction_hash.is_some()
				});
				StepOutcome::new(if done { "Received" } else { "Receive" }, status_of(done))
					.data(ctx.record.command.clone().map(StepData::Command))
					.chain(ctx.destination.as_ref())
			},
		},
		StepRule {
			id: StepId::IbcSend,
			include: |ctx| ctx.destination_is_cosmos() && !ctx.destination_is_hub,
			resolve: resolve_ibc_send,
		},
		StepRule {
			id: StepId::AxelarTransfer,
			include: |ctx| ctx.destination_is_hub,
			resolve: |ctx| {
				let done = ctx.record.axelar_transfer.is_some();
				StepOutcome::new(if done { "Received" } else { "Receive" }, status_of(done))
					.data(ctx.record.axelar_transfer.clone().map(StepData::AxelarTransfer))
					.chain(ctx.hub())
			},
		},
		StepRule {
			id: StepId::Unwrap,
			include: |ctx| ctx.is_type(TransferType::Unwrap),
			resolve: |ctx| {
				let done = ctx
					.record
					.unwrap
					.as_ref()
					.is_some_and(|unwrap| unwrap.tx_hash_unwrap.is_some());
				StepOutcome::new(if done { "Unwrapped" } else { "Unwrap" }, status_of(done))
					.data(ctx.record.unwrap.clone().map(StepData::Unwrap))
					.chain(ctx.destination.as_ref())
			},
		},
	]
}

fn resolve_send(ctx: &TransferContext<'_>) -> StepOutcome {
	let record = ctx.record;
	let data = match ctx.transfer_type {
		Some(TransferType::Wrap) => record.wrap.clone().map(StepData::Wrap),
		Some(TransferType::Erc20Transfer) => {
			record.erc20_transfer.clone().map(StepData::Erc20Transfer)
		}
		_ => record.send.clone().map(StepData::Send),
	};
	let done = data.is_some();

	StepOutcome::new(if done { "Sent" } else { "Send" }, status_of(done))
		.data(data)
		.chain(ctx.source.as_ref())
}

fn vote_status(vote: Option<&TransferVote>) -> StepStatus {
	match vote {
		Some(vote) if vote.success.unwrap_or(false) => StepStatus::Success,
		Some(_) => StepStatus::Failed,
		None => StepStatus::Pending,
	}
}

fn resolve_ibc_send(ctx: &TransferContext<'_>) -> StepOutcome {
	let ibc_send = ctx.record.ibc_send.as_ref();
	let acked = ibc_send.is_some_and(|ibc| ibc.ack_txhash.is_some());
	let received = ibc_send.is_some_and(|ibc| ibc.recv_txhash.is_some());
	let failed = ibc_send.is_some_and(|ibc| ibc.failed_txhash.is_some());

	let (title, status) = if acked || (received && !failed) {
		("Received", StepStatus::Success)
	} else if failed {
		("Error", StepStatus::Failed)
	} else {
		("Execute", StepStatus::Pending)
	};

	// Once the packet is received the step lives on the destination chain
	let chain = if received {
		ctx.destination.as_ref()
	} else {
		ctx.hub()
	};

	StepOutcome::new(title, status)
		.data(ibc_send.cloned().map(StepData::IbcSend))
		.chain(chain)
}
