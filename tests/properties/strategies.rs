use interchain_explorer::{
	models::{
		CallReturnValues, Chain, ChainType, ErrorDetail, GmpConfirm, GmpError, GmpEvent, GmpRecord,
		GmpRefund, IbcSend, Receipt, TransferCommand, TransferConfirm, TransferLink,
		TransferRecord, TransferSend, TransferType, TransferUnwrap, TransferVote, TransferWrap,
	},
	repositories::{ChainRepository, ChainService},
	utils::tests::builders::chain::ChainBuilder,
};
use proptest::{option, prelude::*};
use serde_json::json;

pub const BASE_TIMESTAMP: i64 = 1_700_000_000;
const MAX_OFFSET_SECS: i64 = 3_600;

/// Chain ids known to [`chain_service`]; `unknown` is deliberately missing
pub const CHAIN_IDS: &[&str] = &["ethereum", "avalanche", "osmosis", "axelarnet", "unknown"];

pub fn chain_service() -> ChainService<ChainRepository> {
	ChainService::new_with_repository(ChainRepository::from_chains(vec![
		ChainBuilder::new().id("ethereum").build(),
		ChainBuilder::new().id("avalanche").build(),
		ChainBuilder::new()
			.id("osmosis")
			.chain_type(ChainType::Cosmos)
			.build(),
		ChainBuilder::new()
			.id("axelarnet")
			.chain_type(ChainType::Cosmos)
			.build(),
	]))
	.unwrap()
}

pub fn chain_id_strategy() -> impl Strategy<Value = String> {
	prop::sample::select(CHAIN_IDS).prop_map(str::to_string)
}

fn hash_strategy() -> impl Strategy<Value = String> {
	"0x[0-9a-f]{8}".prop_map(|s| s.to_string())
}

fn timestamp_strategy() -> impl Strategy<Value = i64> {
	(0..MAX_OFFSET_SECS).prop_map(|offset| BASE_TIMESTAMP + offset)
}

pub fn transfer_type_strategy() -> impl Strategy<Value = TransferType> {
	prop_oneof![
		Just(TransferType::DepositAddress),
		Just(TransferType::Wrap),
		Just(TransferType::Unwrap),
		Just(TransferType::Erc20Transfer),
		Just(TransferType::SendToken),
	]
}

pub fn transfer_record_strategy() -> impl Strategy<Value = TransferRecord> {
	(
		option::of(transfer_type_strategy()),
		chain_id_strategy(),
		chain_id_strategy(),
		(
			option::of(hash_strategy()),
			option::of(hash_strategy()),
			any::<bool>(),
			option::of(any::<bool>()),
		),
		(
			option::of(any::<bool>()),
			option::of(hash_strategy()),
			any::<bool>(),
			any::<bool>(),
		),
		(
			option::of(hash_strategy()),
			option::of(hash_strategy()),
			option::of(hash_strategy()),
			any::<bool>(),
		),
	)
		.prop_map(
			|(
				transfer_type,
				source,
				destination,
				(send_hash, deposit_address, confirmed, vote),
				(command_executed, command_hash, axelar_transfer, wrapped),
				(recv_hash, failed_hash, unwrap_hash, erc20),
			)| {
				TransferRecord {
					transfer_type,
					send: send_hash.map(|txhash| TransferSend {
						txhash: Some(txhash),
						source_chain: Some(source.clone()),
						destination_chain: Some(destination.clone()),
						..Default::default()
					}),
					link: deposit_address.map(|address| TransferLink {
						deposit_address: Some(address),
						source_chain: Some(source.clone()),
						destination_chain: Some(destination.clone()),
						..Default::default()
					}),
					confirm: confirmed.then(|| TransferConfirm {
						txhash: Some("CONFIRM".to_string()),
						..Default::default()
					}),
					vote: vote.map(|success| TransferVote {
						success: Some(success),
						..Default::default()
					}),
					command: command_executed.map(|executed| TransferCommand {
						executed: Some(executed),
						transaction_hash: command_hash,
						..Default::default()
					}),
					ibc_send: (recv_hash.is_some() || failed_hash.is_some()).then(|| IbcSend {
						recv_txhash: recv_hash,
						failed_txhash: failed_hash,
						..Default::default()
					}),
					axelar_transfer: axelar_transfer.then(Default::default),
					wrap: wrapped.then(|| TransferWrap {
						tx_hash_wrap: Some("WRAP".to_string()),
						source_chain: Some(source.clone()),
						..Default::default()
					}),
					unwrap: unwrap_hash.map(|hash| TransferUnwrap {
						tx_hash_unwrap: Some(hash),
						destination_chain: Some(destination.clone()),
						..Default::default()
					}),
					erc20_transfer: erc20.then(Default::default),
				}
			},
		)
}

fn event(chain: &str, hash: String, timestamp: i64) -> GmpEvent {
	GmpEvent {
		chain: Some(chain.to_string()),
		transaction_hash: Some(hash),
		block_timestamp: Some(timestamp),
		..Default::default()
	}
}

/// GMP calls in any stage, without an execution outcome
pub fn open_gmp_record_strategy() -> impl Strategy<Value = GmpRecord> {
	(
		chain_id_strategy(),
		chain_id_strategy(),
		timestamp_strategy(),
		(
			option::of(hash_strategy()),
			option::of(hash_strategy()),
			option::of(hash_strategy()),
			option::of(hash_strategy()),
		),
		(any::<bool>(), any::<bool>(), option::of("[0-9]{1,3}"), any::<bool>()),
	)
		.prop_map(
			|(
				source,
				destination,
				timestamp,
				(gas_hash, express_hash, confirm_hash, approve_hash),
				(invalid_call, confirm_failed, proposal_id, refunded),
			)| GmpRecord {
				call: Some(GmpEvent {
					return_values: Some(CallReturnValues {
						destination_chain: Some(destination.clone()),
						..Default::default()
					}),
					..event(&source, "0xCALL".to_string(), timestamp)
				}),
				gas_paid: gas_hash.map(|hash| event(&source, hash, timestamp)),
				express_executed: express_hash.map(|hash| event(&destination, hash, timestamp + 30)),
				confirm: confirm_hash.map(|hash| GmpConfirm {
					txhash: Some(hash),
					block_timestamp: Some(timestamp + 60),
					..Default::default()
				}),
				confirm_failed,
				approved: approve_hash.map(|hash| event(&destination, hash, timestamp + 90)),
				refunded: refunded.then(|| GmpRefund {
					receipt: Some(Receipt {
						status: Some(json!(1)),
					}),
					..Default::default()
				}),
				is_invalid_call: invalid_call,
				proposal_id,
				..Default::default()
			},
		)
}

/// Open GMP calls that hit an execution error at the returned timestamp
pub fn errored_gmp_record_strategy() -> impl Strategy<Value = (GmpRecord, i64)> {
	(open_gmp_record_strategy(), 0..MAX_OFFSET_SECS).prop_map(|(mut record, offset)| {
		let error_timestamp = BASE_TIMESTAMP + offset;
		record.error = Some(GmpError {
			transaction_hash: Some("0xERR".to_string()),
			block_timestamp: Some(error_timestamp),
			error: Some(ErrorDetail {
				message: Some("execution reverted".to_string()),
				..Default::default()
			}),
			..Default::default()
		});
		(record, error_timestamp)
	})
}

/// Chains with distinct lowercase ids and aliases
pub fn chains_strategy() -> impl Strategy<Value = Vec<Chain>> {
	prop::collection::hash_set("[a-z][a-z0-9]{2,8}", 1..8).prop_map(|ids| {
		ids.into_iter()
			.map(|id| {
				let alias = format!("{}-alias", id);
				ChainBuilder::new().id(&id).aliases(&[alias.as_str()]).build()
			})
			.collect()
	})
}
