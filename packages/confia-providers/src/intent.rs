use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

/// One best-effort call to the query-interpretation oracle. A single attempt
/// per search; the caller owns the deterministic fallback.
pub async fn interpret(cfg: &confia_config::LlmProviderConfig, messages: &[Value]) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": messages,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_intent_response(json)
}

fn parse_intent_response(json: Value) -> Result<Value> {
	if let Some(content) = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
	{
		let parsed: Value = serde_json::from_str(content)
			.map_err(|_| eyre::eyre!("Intent content is not valid JSON."))?;

		if !parsed.is_object() {
			return Err(eyre::eyre!("Intent content is not a JSON object."));
		}

		return Ok(parsed);
	}

	// Providers configured for a JSON response mime type answer with the bare
	// object instead of a chat envelope.
	if json.get("choices").is_none() && json.is_object() {
		return Ok(json);
	}

	Err(eyre::eyre!("Intent response is missing JSON content."))
}
