#![no_main]

use chrono::DateTime;
use interchain_explorer::{
	models::{Chain, ChainType, GmpRecord, TransferRecord},
	repositories::{ChainRepository, ChainService},
	services::steps::{displayed_steps, StepDeriver},
};
use libfuzzer_sys::fuzz_target;

fn chain(id: &str, chain_type: ChainType) -> Chain {
	Chain {
		id: id.to_string(),
		name: id.to_string(),
		chain_type,
		aliases: Vec::new(),
		explorer: None,
		deprecated: false,
	}
}

fuzz_target!(|data: &[u8]| {
	let Ok(chains) = ChainService::new_with_repository(ChainRepository::from_chains([
		chain("ethereum", ChainType::Evm),
		chain("osmosis", ChainType::Cosmos),
		chain("axelarnet", ChainType::Cosmos),
	])) else {
		return;
	};
	let deriver = StepDeriver::new(&chains);

	if let Ok(record) = serde_json::from_slice::<TransferRecord>(data) {
		let steps = deriver.transfer_steps(&record, None);
		let _ = displayed_steps(&steps);
	}

	if let Ok(record) = serde_json::from_slice::<GmpRecord>(data) {
		let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
		let _ = deriver.gmp_hops(&record, now, &[]);
		let _ = deriver.gmp_actions(&record, now);
	}
});
