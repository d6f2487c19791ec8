//! Backend API error types and handling.
//!
//! Provides error types for calls to the indexer query endpoint,
//! covering transport failures, unexpected statuses and undecodable bodies.

use log::error;
use std::{error::Error, fmt};

/// Represents possible errors while querying the explorer backend
#[derive(Debug)]
pub enum ApiError {
	/// The request could not be sent or no response arrived
	RequestError(String),
	/// The backend answered with a non-success status
	ResponseError { status: u16, body: String },
	/// The response body did not have the expected shape
	DecodeError(String),
	/// Invalid client configuration, such as a malformed endpoint
	ConfigError(String),
}

impl ApiError {
	fn format_message(&self) -> String {
		match self {
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::ResponseError { status, body } => {
				format!("Response error: status {}: {}", status, body)
			}
			Self::DecodeError(msg) => format!("Decode error: {}", msg),
			Self::ConfigError(msg) => format!("Config error: {}", msg),
		}
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new response error with logging
	pub fn response_error(status: u16, body: impl Into<String>) -> Self {
		let error = Self::ResponseError {
			status,
			body: body.into(),
		};
		error!("{}", error.format_message());
		error
	}

	/// Creates a new decode error with logging
	pub fn decode_error(msg: impl Into<String>) -> Self {
		let error = Self::DecodeError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new configuration error with logging
	pub fn config_error(msg: impl Into<String>) -> Self {
		let error = Self::ConfigError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl From<reqwest::Error> for ApiError {
	fn from(error: reqwest::Error) -> Self {
		Self::request_error(error.to_string())
	}
}

impl From<reqwest_middleware::Error> for ApiError {
	fn from(error: reqwest_middleware::Error) -> Self {
		Self::request_error(error.to_string())
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(error: serde_json::Error) -> Self {
		Self::decode_error(error.to_string())
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ApiError {}
