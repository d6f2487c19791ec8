//! Cross-chain records returned by the indexer.
//!
//! - `transfer`: token transfers (deposit address, wrap/unwrap, ERC20, `sendToken`)
//! - `gmp`: general message passing calls, including multihop origin/callback hops
//! - `time_spent`: per chain pair duration estimates

pub(crate) mod de;
mod gmp;
mod time_spent;
mod transfer;

pub use gmp::{
	CallReturnValues, ErrorDetail, GmpConfirm, GmpError, GmpEvent, GmpRecord, GmpRefund, Receipt,
};
pub use time_spent::TimeSpent;
pub use transfer::{
	AxelarTransfer, Erc20Transfer, IbcSend, TransferCommand, TransferConfirm, TransferLink,
	TransferRecord, TransferSend, TransferType, TransferUnwrap, TransferVote, TransferWrap,
};
