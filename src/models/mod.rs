//! Domain models and data structures for the explorer.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (Chain, Step, StepTimings)
//! - `records`: Transfer and GMP records returned by the indexer

mod config;
mod core;
mod records;

// Re-export core types
pub use core::{
	Chain, ChainType, Explorer, Step, StepData, StepId, StepLink, StepStatus, StepTimings,
	DEFAULT_EXECUTE_ERROR_GRACE_SECS, DEFAULT_FINALITY_BUFFER_SECS, DEFAULT_GAS_CHECK_WINDOW_SECS,
	DEFAULT_IBC_WAIT_WINDOW_SECS, DEFAULT_MANUAL_ACTION_WINDOW_SECS,
};

// Re-export record types
pub use records::{
	AxelarTransfer, CallReturnValues, Erc20Transfer, ErrorDetail, GmpConfirm, GmpError, GmpEvent,
	GmpRecord, GmpRefund, IbcSend, Receipt, TimeSpent, TransferCommand, TransferConfirm, TransferLink,
	TransferRecord, TransferSend, TransferType, TransferUnwrap, TransferVote, TransferWrap,
};

// Re-export config types
pub use config::{
	load_chain_overrides, ConfigError, ConfigLoader, ExplorerConfig, DEFAULT_CHAINS_DIR,
	DEFAULT_CHAIN_OVERRIDES_FILE,
};
