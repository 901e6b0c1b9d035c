use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ConfiaService, Error, Result};

/// Biography shown when the summary provider is unavailable.
pub const FALLBACK_SUMMARY: &str =
	"Profissional verificado com excelência em serviços residenciais e comerciais.";

const SUMMARY_SYSTEM_PROMPT: &str = "\
Escreva uma biografia curta, em português e com tom premium, para o perfil \
de um profissional de serviços. Use no máximo duas frases, destaque \
confiabilidade e qualidade, e responda apenas com o texto da biografia.";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
	pub name: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub location: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SummaryResponse {
	pub summary: String,
}

impl ConfiaService {
	/// Provider failures degrade to the canned biography; only an empty name
	/// is an error.
	pub async fn profile_summary(&self, req: SummaryRequest) -> Result<SummaryResponse> {
		let name = req.name.trim();

		if name.is_empty() {
			return Err(Error::InvalidRequest {
				message: "Profile name must not be empty.".to_string(),
			});
		}

		let cfg = &self.cfg.providers.summary;
		let messages = build_summary_messages(name, req.category.trim(), req.location.trim());
		let call = self.providers.summary.complete(cfg, &messages);
		let summary = match tokio::time::timeout(Duration::from_millis(cfg.timeout_ms), call).await
		{
			Ok(Ok(text)) => text,
			Ok(Err(err)) => {
				tracing::warn!(error = %err, "Summary provider failed, using the canned biography.");

				FALLBACK_SUMMARY.to_string()
			},
			Err(_) => {
				tracing::warn!("Summary provider timed out, using the canned biography.");

				FALLBACK_SUMMARY.to_string()
			},
		};

		Ok(SummaryResponse { summary })
	}
}

fn build_summary_messages(name: &str, category: &str, location: &str) -> Vec<Value> {
	let mut profile = format!("Nome: {name}");

	if !category.is_empty() {
		profile.push_str(&format!("\nServiço: {category}"));
	}
	if !location.is_empty() {
		profile.push_str(&format!("\nRegião: {location}"));
	}

	vec![
		serde_json::json!({ "role": "system", "content": SUMMARY_SYSTEM_PROMPT }),
		serde_json::json!({ "role": "user", "content": profile }),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_messages_skip_absent_fields() {
		let messages = build_summary_messages("Ana Silva", "", "Moema, SP");
		let user = messages[1].get("content").and_then(|v| v.as_str()).expect("user content");

		assert!(user.contains("Nome: Ana Silva"));
		assert!(user.contains("Região: Moema, SP"));
		assert!(!user.contains("Serviço:"));
	}
}
