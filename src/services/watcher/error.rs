//! Watcher error types and handling.

use log::error;
use std::{error::Error, fmt};

use crate::services::api::ApiError;

#[derive(Debug)]
pub enum WatcherError {
	/// Fetching the record from the backend failed
	FetchError(String),
	/// The backend has no record for the transaction
	NotFound(String),
	/// The shutdown channel or a timer failed
	InternalError(String),
}

impl WatcherError {
	fn format_message(&self) -> String {
		match self {
			Self::FetchError(msg) => format!("Fetch error: {}", msg),
			Self::NotFound(tx_hash) => format!("Record not found: {}", tx_hash),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	pub fn fetch_error(msg: impl Into<String>) -> Self {
		let error = Self::FetchError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn not_found(tx_hash: impl Into<String>) -> Self {
		let error = Self::NotFound(tx_hash.into());
		error!("{}", error.format_message());
		error
	}

	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl From<ApiError> for WatcherError {
	fn from(err: ApiError) -> Self {
		Self::fetch_error(err.to_string())
	}
}

impl fmt::Display for WatcherError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for WatcherError {}
