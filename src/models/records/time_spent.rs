use serde::{Deserialize, Serialize};

/// Observed average durations, in seconds, for GMP calls between two chains
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeSpent {
	pub source_chain: Option<String>,
	pub destination_chain: Option<String>,
	pub confirm: Option<f64>,
	pub approve: Option<f64>,
	pub total: Option<f64>,
}

impl TimeSpent {
	/// Finds the estimate for a chain pair, ignoring ASCII case
	pub fn lookup<'a>(
		estimates: &'a [TimeSpent],
		source_chain: &str,
		destination_chain: &str,
	) -> Option<&'a TimeSpent> {
		let eq = |field: &Option<String>, value: &str| {
			field
				.as_deref()
				.is_some_and(|field| field.eq_ignore_ascii_case(value))
		};
		estimates.iter().find(|estimate| {
			eq(&estimate.source_chain, source_chain)
				&& eq(&estimate.destination_chain, destination_chain)
		})
	}

	/// Estimated seconds until the hub confirms the call
	pub fn confirm_secs(&self) -> Option<i64> {
		self.confirm
			.filter(|secs| secs.is_finite() && *secs >= 0.0)
			.map(|secs| secs.round() as i64)
	}
}
