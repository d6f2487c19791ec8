use serde::{Deserialize, Serialize};

/// Grace windows used when titling and classifying steps, in seconds.
///
/// The values were tuned against observed relayer latency and are only
/// heuristics; none of them changes what an on-chain event means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StepTimings {
	/// A call younger than this is still being checked for a gas payment
	pub gas_check_window: i64,
	/// An execution error only becomes terminal after this long
	pub execute_error_grace: i64,
	/// A hub-side execution older than this is reported as waiting for IBC
	pub ibc_wait_window: i64,
	/// Approval or execution overdue by this long can be pushed manually
	pub manual_action_window: i64,
	/// Added to the estimated confirmation time before leaving "finality"
	pub finality_buffer: i64,
}

pub const DEFAULT_GAS_CHECK_WINDOW_SECS: i64 = 30;
pub const DEFAULT_EXECUTE_ERROR_GRACE_SECS: i64 = 120;
pub const DEFAULT_IBC_WAIT_WINDOW_SECS: i64 = 60;
pub const DEFAULT_MANUAL_ACTION_WINDOW_SECS: i64 = 300;
pub const DEFAULT_FINALITY_BUFFER_SECS: i64 = 15;

impl Default for StepTimings {
	fn default() -> Self {
		Self {
			gas_check_window: DEFAULT_GAS_CHECK_WINDOW_SECS,
			execute_error_grace: DEFAULT_EXECUTE_ERROR_GRACE_SECS,
			ibc_wait_window: DEFAULT_IBC_WAIT_WINDOW_SECS,
			manual_action_window: DEFAULT_MANUAL_ACTION_WINDOW_SECS,
			finality_buffer: DEFAULT_FINALITY_BUFFER_SECS,
		}
	}
}
