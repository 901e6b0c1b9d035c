use std::time::Duration;

use serde_json::Value;

use confia_config::LlmProviderConfig;
use confia_domain::intent::{QueryInput, SearchIntent};

use crate::IntentProvider;

const INTENT_SYSTEM_PROMPT: &str = "\
Você interpreta buscas de um diretório de profissionais de serviços no \
Brasil. Extraia da consulta do usuário um objeto JSON com os campos \
\"category\" (o serviço procurado), \"location\" (bairro ou cidade, se \
mencionado) e \"tags\" (lista de palavras-chave relevantes). Use strings \
vazias e lista vazia quando a consulta não informar o campo. Responda \
apenas com o objeto JSON.";

pub(crate) async fn resolve(
	cfg: &LlmProviderConfig,
	provider: &dyn IntentProvider,
	input: &QueryInput,
) -> SearchIntent {
	let raw = match input {
		QueryInput::Explicit(explicit) =>
			return SearchIntent::explicit(&explicit.service, &explicit.location),
		QueryInput::FreeText(raw) => raw.trim(),
	};

	if raw.is_empty() {
		return SearchIntent::default();
	}

	let messages = build_intent_messages(raw);
	let call = provider.interpret(cfg, &messages);

	match tokio::time::timeout(Duration::from_millis(cfg.timeout_ms), call).await {
		Ok(Ok(value)) => parse_partial_intent(&value),
		Ok(Err(err)) => {
			tracing::warn!(error = %err, "Intent oracle failed, using the raw-query fallback.");

			SearchIntent::fallback(raw)
		},
		Err(_) => {
			tracing::warn!("Intent oracle timed out, using the raw-query fallback.");

			SearchIntent::fallback(raw)
		},
	}
}

pub(crate) fn build_intent_messages(raw: &str) -> Vec<Value> {
	vec![
		serde_json::json!({ "role": "system", "content": INTENT_SYSTEM_PROMPT }),
		serde_json::json!({ "role": "user", "content": raw }),
	]
}

/// Each field defaults independently; a missing field means "no constraint",
/// not a failed extraction.
fn parse_partial_intent(value: &Value) -> SearchIntent {
	let field = |name: &str| {
		value.get(name).and_then(Value::as_str).map(str::trim).unwrap_or_default().to_string()
	};
	let tags = value
		.get("tags")
		.and_then(Value::as_array)
		.map(|tags| {
			tags.iter()
				.filter_map(Value::as_str)
				.map(|tag| tag.trim().to_string())
				.filter(|tag| !tag.is_empty())
				.collect()
		})
		.unwrap_or_default();

	SearchIntent { category: field("category"), location: field("location"), tags }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_intent_defaults_missing_fields() {
		let value = serde_json::json!({ "category": "Diarista" });
		let intent = parse_partial_intent(&value);

		assert_eq!(intent.category, "Diarista");
		assert_eq!(intent.location, "");
		assert!(intent.tags.is_empty());
	}

	#[test]
	fn partial_intent_drops_blank_tags() {
		let value = serde_json::json!({
			"category": "Diarista",
			"location": " Moema ",
			"tags": ["limpeza", "  ", "passadoria", 7]
		});
		let intent = parse_partial_intent(&value);

		assert_eq!(intent.location, "Moema");
		assert_eq!(intent.tags, vec!["limpeza".to_string(), "passadoria".to_string()]);
	}

	#[test]
	fn partial_intent_tolerates_wrongly_typed_fields() {
		let value = serde_json::json!({ "category": 3, "tags": "limpeza" });
		let intent = parse_partial_intent(&value);

		assert!(intent.is_unconstrained());
	}
}
