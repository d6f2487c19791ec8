use crate::properties::strategies::{chain_service, transfer_record_strategy, transfer_type_strategy};

use interchain_explorer::{
	models::{StepId, StepStatus, TransferType},
	services::steps::{displayed_steps, StepDeriver},
};
use proptest::{option, prelude::*, test_runner::Config};

const TRANSFER_ORDER: [StepId; 10] = [
	StepId::Link,
	StepId::Send,
	StepId::Wrap,
	StepId::Erc20Transfer,
	StepId::Confirm,
	StepId::Vote,
	StepId::Command,
	StepId::IbcSend,
	StepId::AxelarTransfer,
	StepId::Unwrap,
];

fn position(id: StepId) -> usize {
	TRANSFER_ORDER
		.iter()
		.position(|candidate| *candidate == id)
		.unwrap_or(usize::MAX)
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_steps_follow_fixed_order(
		record in transfer_record_strategy(),
		transfer_type in option::of(transfer_type_strategy()),
	) {
		let chains = chain_service();
		let steps = StepDeriver::new(&chains).transfer_steps(&record, transfer_type);

		let positions: Vec<usize> = steps.iter().map(|step| position(step.id)).collect();
		prop_assert!(positions.iter().all(|p| *p != usize::MAX));
		prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
		prop_assert!(steps.iter().any(|step| step.id == StepId::Send));
	}

	#[test]
	fn test_linked_deposit_starts_with_link(record in transfer_record_strategy()) {
		let chains = chain_service();
		let steps = StepDeriver::new(&chains)
			.transfer_steps(&record, Some(TransferType::DepositAddress));

		let has_link = record.link.is_some();
		prop_assert_eq!(steps[0].id == StepId::Link, has_link);
		if has_link {
			prop_assert_eq!(steps[0].status, StepStatus::Success);
		}
	}

	#[test]
	fn test_derivation_is_idempotent(record in transfer_record_strategy()) {
		let chains = chain_service();
		let deriver = StepDeriver::new(&chains);

		let first = deriver.transfer_steps(&record, None);
		let second = deriver.transfer_steps(&record, None);
		prop_assert_eq!(&first, &second);
		prop_assert_eq!(displayed_steps(&first), displayed_steps(&second));
	}

	#[test]
	fn test_displayed_steps_keep_order(record in transfer_record_strategy()) {
		let chains = chain_service();
		let steps = StepDeriver::new(&chains).transfer_steps(&record, None);
		let displayed = displayed_steps(&steps);

		prop_assert!(displayed.len() <= steps.len());
		let mut remaining = steps.iter();
		for step in &displayed {
			prop_assert!(step.is_displayed());
			prop_assert!(remaining.any(|candidate| candidate == step));
		}
	}
}
