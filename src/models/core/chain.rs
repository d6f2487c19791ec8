use serde::{Deserialize, Serialize};

/// Execution environment of a chain connected to the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
	/// Ethereum virtual machine chains (gateway contracts, batched commands)
	#[serde(alias = "EVM")]
	Evm,
	/// Cosmos SDK chains (IBC transport)
	#[serde(alias = "COSMOS")]
	Cosmos,
}

/// Block explorer metadata used to build transaction, block and address links
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Explorer {
	pub name: Option<String>,
	pub url: String,
	#[serde(default = "default_transaction_path")]
	pub transaction_path: String,
	#[serde(default = "default_block_path")]
	pub block_path: String,
	#[serde(default = "default_address_path")]
	pub address_path: String,
}

fn default_transaction_path() -> String {
	"/tx/{tx}".to_string()
}

fn default_block_path() -> String {
	"/block/{block}".to_string()
}

fn default_address_path() -> String {
	"/address/{address}".to_string()
}

impl Explorer {
	/// Link to a transaction, or `None` when the explorer has no base url
	pub fn transaction_url(&self, tx_hash: &str) -> Option<String> {
		self.render(&self.transaction_path, "{tx}", tx_hash)
	}

	/// Link to a block by height or hash
	pub fn block_url(&self, block: &str) -> Option<String> {
		self.render(&self.block_path, "{block}", block)
	}

	/// Link to an account or contract address
	pub fn address_url(&self, address: &str) -> Option<String> {
		self.render(&self.address_path, "{address}", address)
	}

	fn render(&self, path: &str, placeholder: &str, value: &str) -> Option<String> {
		if self.url.is_empty() || path.is_empty() || value.is_empty() {
			return None;
		}
		Some(format!("{}{}", self.url, path.replace(placeholder, value)))
	}
}

/// A chain known to the explorer
///
/// Chains are resolved by `id`, `name` or any of `aliases`, case-insensitively.
/// Multiple historical identifiers can point at the same chain through the
/// aliases or through the registry-wide override table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chain {
	pub id: String,
	#[serde(alias = "chain_name")]
	pub name: String,
	pub chain_type: ChainType,
	#[serde(default)]
	pub aliases: Vec<String>,
	#[serde(default)]
	pub explorer: Option<Explorer>,
	#[serde(default)]
	pub deprecated: bool,
}

impl Chain {
	pub fn is_evm(&self) -> bool {
		self.chain_type == ChainType::Evm
	}

	pub fn is_cosmos(&self) -> bool {
		self.chain_type == ChainType::Cosmos
	}

	/// Whether `key` names this chain by id, name or alias (ASCII case-insensitive)
	pub fn matches(&self, key: &str) -> bool {
		let key = key.trim();
		self.id.eq_ignore_ascii_case(key)
			|| self.name.eq_ignore_ascii_case(key)
			|| self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(key))
	}

	/// Explorer link for a transaction on this chain, if explorer metadata exists
	pub fn transaction_url(&self, tx_hash: &str) -> Option<String> {
		self.explorer
			.as_ref()
			.and_then(|explorer| explorer.transaction_url(tx_hash))
	}
}
