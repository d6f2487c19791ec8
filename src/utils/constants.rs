//! Constants shared across the explorer.

/// Id of the hub chain that confirms and approves cross-chain traffic
pub const HUB_CHAIN_ID: &str = "axelarnet";

/// Backend query endpoint used when `EXPLORER_API_URL` is unset
pub const DEFAULT_API_URL: &str = "https://api.axelarscan.io/api";

/// Refresh interval of the watcher when `EXPLORER_POLL_INTERVAL_SECS` is unset
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
