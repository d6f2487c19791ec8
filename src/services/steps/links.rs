//! Transaction hash and link resolution per step.
//!
//! Hashes link to the block explorer of the step's chain. Steps that have no
//! on-chain hash yet fall back to the explorer's own pages: a validator poll
//! for votes and confirmations, a command batch for EVM commands.

use crate::models::{Step, StepData, StepId, StepLink};

/// Path of the internal page for a validator poll
pub fn poll_path(poll_id: &str) -> String {
	format!("/evm-poll/{}", urlencoding::encode(poll_id))
}

/// Path of the internal page for a signed command batch
pub fn batch_path(chain: &str, batch_id: &str) -> String {
	format!(
		"/evm-batch/{}/{}",
		urlencoding::encode(chain),
		urlencoding::encode(batch_id)
	)
}

fn first(candidates: &[&Option<String>]) -> Option<String> {
	candidates
		.iter()
		.find_map(|candidate| candidate.as_ref().filter(|s| !s.is_empty()))
		.cloned()
}

/// Resolves the hash and URL a step should point at.
///
/// `app_url` is the base of internal pages; an empty base yields relative
/// paths. A chain without explorer metadata leaves `url` empty but keeps the
/// hash.
pub fn step_link(step: &Step, app_url: &str) -> StepLink {
	let explorer_link = |tx_hash: Option<String>| {
		let url = tx_hash.as_deref().and_then(|tx| {
			step.chain
				.as_ref()
				.and_then(|chain| chain.transaction_url(tx))
		});
		StepLink { tx_hash, url }
	};
	let internal_link = |path: String| StepLink {
		tx_hash: None,
		url: Some(format!("{}{}", app_url.trim_end_matches('/'), path)),
	};

	let Some(data) = step.data.as_ref() else {
		return StepLink::default();
	};

	match (step.id, data) {
		(StepId::Vote, StepData::Vote(vote)) => {
			match (first(&[&vote.txhash, &vote.transaction_hash]), &vote.poll_id) {
				(Some(tx), _) => explorer_link(Some(tx)),
				(None, Some(poll_id)) => internal_link(poll_path(poll_id)),
				(None, None) => StepLink::default(),
			}
		}
		(StepId::Command, StepData::Command(command)) => {
			let chain = command
				.chain
				.clone()
				.or_else(|| step.chain.as_ref().map(|chain| chain.id.clone()));
			match (&command.transaction_hash, chain, &command.batch_id) {
				(Some(tx), _, _) => explorer_link(Some(tx.clone())),
				(None, Some(chain), Some(batch_id)) => internal_link(batch_path(&chain, batch_id)),
				_ => StepLink::default(),
			}
		}
		(_, StepData::IbcSend(ibc)) => explorer_link(first(&[
			&ibc.ack_txhash,
			&ibc.recv_txhash,
			&ibc.failed_txhash,
			&ibc.txhash,
		])),
		(_, StepData::GmpConfirm(confirm)) => match (&confirm.txhash, &confirm.poll_id) {
			(Some(tx), _) => explorer_link(Some(tx.clone())),
			(None, Some(poll_id)) => internal_link(poll_path(poll_id)),
			(None, None) => StepLink::default(),
		},
		(_, StepData::Link(link)) => explorer_link(link.txhash.clone()),
		(_, StepData::Send(send)) => explorer_link(send.txhash.clone()),
		(_, StepData::Wrap(wrap)) => explorer_link(first(&[&wrap.tx_hash_wrap, &wrap.txhash])),
		(_, StepData::Erc20Transfer(transfer)) => {
			explorer_link(first(&[&transfer.tx_hash_transfer, &transfer.txhash]))
		}
		(_, StepData::Confirm(confirm)) => explorer_link(confirm.txhash.clone()),
		(_, StepData::Vote(vote)) => explorer_link(vote.txhash.clone()),
		(_, StepData::Command(command)) => explorer_link(command.transaction_hash.clone()),
		(_, StepData::AxelarTransfer(transfer)) => explorer_link(transfer.txhash.clone()),
		(_, StepData::Unwrap(unwrap)) => {
			explorer_link(first(&[&unwrap.tx_hash_unwrap, &unwrap.txhash]))
		}
		(_, StepData::GmpEvent(event)) => explorer_link(first(&[
			&event.transaction_hash,
			&event.axelar_transaction_hash,
		])),
		(_, StepData::GmpError(error)) => explorer_link(error.transaction_hash.clone()),
		(_, StepData::GmpRefund(refund)) => explorer_link(refund.transaction_hash.clone()),
		(_, StepData::Executed(_)) => StepLink::default(),
	}
}
