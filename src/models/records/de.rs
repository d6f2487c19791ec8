//! Lenient field decoders for indexer payloads.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, a number or null for identifiers the indexer emits in
/// either form (poll ids, batch ids, proposal ids).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<Value>::deserialize(deserializer)? {
		Some(Value::String(s)) if !s.is_empty() => Some(s),
		Some(Value::Number(n)) => Some(n.to_string()),
		_ => None,
	})
}

/// JavaScript-style truthiness, used for receipt statuses that arrive as
/// `1`, `true` or `"0x1"`.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => !s.is_empty() && s != "0" && s != "0x0",
		Value::Array(_) | Value::Object(_) => true,
	}
}
