use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub store: Store,
	pub providers: Providers,
	#[serde(default)]
	pub search: Search,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

/// Read-only record store over HTTP; the documents it serves are owned by an
/// external review/verification process.
#[derive(Clone, Debug, Deserialize)]
pub struct Store {
	pub api_base: String,
	pub path: String,
	pub api_key: Option<String>,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Providers {
	pub intent: LlmProviderConfig,
	pub summary: LlmProviderConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Minimum rating the top-ranked professional needs to earn the featured
	/// tier.
	pub featured_threshold: f64,
	pub suggestion_limit: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self { featured_threshold: 4.5, suggestion_limit: 10 }
	}
}
