//! Core domain models for the explorer.
//!
//! This module contains the fundamental data structures that represent:
//! - Chains: Registry entries with chain type and block explorer metadata
//! - Steps: Derived, display-ready stages of a cross-chain pipeline
//! - Timings: Grace windows applied while deriving steps

mod chain;
mod step;
mod timings;

pub use chain::{Chain, ChainType, Explorer};
pub use step::{Step, StepData, StepId, StepLink, StepStatus};
pub use timings::{
	StepTimings, DEFAULT_EXECUTE_ERROR_GRACE_SECS, DEFAULT_FINALITY_BUFFER_SECS,
	DEFAULT_GAS_CHECK_WINDOW_SECS, DEFAULT_IBC_WAIT_WINDOW_SECS,
	DEFAULT_MANUAL_ACTION_WINDOW_SECS,
};
