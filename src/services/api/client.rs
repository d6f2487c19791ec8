//! Client for the explorer backend.
//!
//! Every query is a POST of `{ "method": <name>, ...params }` to a single
//! endpoint. List methods answer `{ "data": [...], "total": n }`, some answer
//! a bare array.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::DefaultRetryableStrategy;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::time::Duration;
use url::Url;

use crate::{
	models::{Chain, GmpRecord, TimeSpent, TransferRecord},
	services::api::ApiError,
	utils::http::{create_base_http_client, create_retryable_http_client, HttpRetryConfig},
};

/// A page of results from a list method
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResponse<T> {
	pub data: Vec<T>,
	pub total: Option<u64>,
}

impl<T: DeserializeOwned> SearchResponse<T> {
	/// Accepts either the `{ data, total }` envelope or a bare array
	pub fn from_value(value: Value) -> Result<Self, ApiError> {
		match value {
			Value::Array(items) => {
				let total = items.len() as u64;
				let data = items
					.into_iter()
					.map(serde_json::from_value)
					.collect::<Result<Vec<T>, _>>()?;
				Ok(Self {
					data,
					total: Some(total),
				})
			}
			Value::Object(mut object) => {
				let data = match object.remove("data") {
					Some(Value::Array(items)) => items
						.into_iter()
						.map(serde_json::from_value)
						.collect::<Result<Vec<T>, _>>()?,
					Some(Value::Null) | None => Vec::new(),
					Some(other) => {
						return Err(ApiError::decode_error(format!(
							"expected data array, got {}",
							other
						)))
					}
				};
				let total = object.get("total").and_then(Value::as_u64);
				Ok(Self { data, total })
			}
			other => Err(ApiError::decode_error(format!(
				"expected object or array, got {}",
				other
			))),
		}
	}
}

/// Queries served by the explorer backend
#[async_trait]
pub trait ExplorerApi: Send + Sync {
	/// Sends a raw query; `params` must be a JSON object or null
	async fn query(&self, method: &str, params: Value) -> Result<Value, ApiError>;

	async fn search_transfers(
		&self,
		params: Value,
	) -> Result<SearchResponse<TransferRecord>, ApiError> {
		SearchResponse::from_value(self.query("searchTransfers", params).await?)
	}

	async fn search_gmp(&self, params: Value) -> Result<SearchResponse<GmpRecord>, ApiError> {
		SearchResponse::from_value(self.query("searchGMP", params).await?)
	}

	async fn search_polls(&self, params: Value) -> Result<SearchResponse<Value>, ApiError> {
		SearchResponse::from_value(self.query("searchPolls", params).await?)
	}

	async fn get_chains(&self) -> Result<Vec<Chain>, ApiError> {
		Ok(SearchResponse::from_value(self.query("getChains", Value::Null).await?)?.data)
	}

	async fn get_time_spents(&self) -> Result<Vec<TimeSpent>, ApiError> {
		Ok(SearchResponse::from_value(self.query("GMPTimeSpents", Value::Null).await?)?.data)
	}

	/// The transfer started by `tx_hash`, if the indexer has seen it
	async fn get_transfer(&self, tx_hash: &str) -> Result<Option<TransferRecord>, ApiError> {
		let response = self
			.search_transfers(json!({ "txHash": tx_hash, "size": 1 }))
			.await?;
		Ok(response.data.into_iter().next())
	}

	/// The GMP call started by `tx_hash`, if the indexer has seen it
	async fn get_gmp(&self, tx_hash: &str) -> Result<Option<GmpRecord>, ApiError> {
		let response = self.search_gmp(json!({ "txHash": tx_hash, "size": 1 })).await?;
		Ok(response.data.into_iter().next())
	}
}

/// HTTP implementation of [`ExplorerApi`] with transient-error retries
#[derive(Clone, Debug)]
pub struct ExplorerApiClient {
	client: ClientWithMiddleware,
	url: Url,
}

impl ExplorerApiClient {
	pub fn new(api_url: &str) -> Result<Self, ApiError> {
		Self::new_with_config(api_url, &HttpRetryConfig::default(), Duration::from_secs(30))
	}

	pub fn new_with_config(
		api_url: &str,
		retry_config: &HttpRetryConfig,
		timeout: Duration,
	) -> Result<Self, ApiError> {
		let url = Url::parse(api_url)
			.map_err(|e| ApiError::config_error(format!("Invalid API url {}: {}", api_url, e)))?;
		let base_client = create_base_http_client(timeout)
			.map_err(|e| ApiError::config_error(format!("Failed to build HTTP client: {}", e)))?;
		let client = create_retryable_http_client::<DefaultRetryableStrategy>(
			retry_config,
			base_client,
			None,
		);
		Ok(Self { client, url })
	}

	pub fn url(&self) -> &Url {
		&self.url
	}
}

fn request_body(method: &str, params: Value) -> Result<Value, ApiError> {
	let mut body = match params {
		Value::Object(object) => object,
		Value::Null => Map::new(),
		other => {
			return Err(ApiError::request_error(format!(
				"params for {} must be an object, got {}",
				method, other
			)))
		}
	};
	body.insert("method".to_string(), Value::String(method.to_string()));
	Ok(Value::Object(body))
}

#[async_trait]
impl ExplorerApi for ExplorerApiClient {
	async fn query(&self, method: &str, params: Value) -> Result<Value, ApiError> {
		let body = request_body(method, params)?;
		tracing::debug!(method, url = %self.url, "Querying explorer API");

		let response = self.client.post(self.url.clone()).json(&body).send().await?;
		let status = response.status();
		if !status.is_success() {
			let text = response.text().await.unwrap_or_default();
			return Err(ApiError::response_error(status.as_u16(), text));
		}

		let bytes = response.bytes().await?;
		Ok(serde_json::from_slice(&bytes)?)
	}
}
