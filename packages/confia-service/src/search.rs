mod filter;
mod intent;
mod ranking;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use confia_domain::{
	intent::{ExplicitQuery, QueryInput, SearchIntent},
	professional::ProfessionalRecord,
	trust,
};
use confia_storage::records::RecordQuery;
pub use ranking::Tier;

use crate::{ConfiaService, Result};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub service: Option<String>,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub facets: FacetFilters,
}

/// Optional result constraints beyond the interpreted intent. Defaults mean
/// "no constraint".
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetFilters {
	#[serde(default)]
	pub elite_only: bool,
	#[serde(default)]
	pub min_rating: Option<f64>,
	#[serde(default)]
	pub online_only: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	pub trace_id: Uuid,
	pub intent: SearchIntent,
	pub total: usize,
	pub items: Vec<RankedResult>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
	#[serde(flatten)]
	pub record: ProfessionalRecord,
	pub rank: usize,
	pub tier: Tier,
	pub badge_label: &'static str,
	pub display_trust_score: u8,
}

impl SearchRequest {
	/// Explicit service/location fields win over free text; free text falls
	/// back to an empty query.
	fn input(&self) -> QueryInput {
		match (&self.service, &self.location) {
			(None, None) => QueryInput::FreeText(self.query.clone().unwrap_or_default()),
			(service, location) => QueryInput::Explicit(ExplicitQuery {
				service: service.clone().unwrap_or_default(),
				location: location.clone().unwrap_or_default(),
			}),
		}
	}
}

impl ConfiaService {
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let trace_id = Uuid::new_v4();
		let input = req.input();
		let raw_query = match &input {
			QueryInput::FreeText(raw) => raw.trim().to_string(),
			QueryInput::Explicit(explicit) => explicit.service.trim().to_string(),
		};
		let intent = self.resolve_intent(&input).await;
		let population =
			self.store.fetch(&RecordQuery { active_only: true, ..Default::default() }).await?;
		let matches = filter::filter(&population, &intent, &req.facets, &raw_query);
		let ranked = ranking::rank(matches, &intent, self.cfg.search.featured_threshold);
		let items: Vec<RankedResult> = ranked
			.into_iter()
			.map(|item| {
				let indicators = trust::derive_display(&item.record);

				RankedResult {
					record: item.record,
					rank: item.rank,
					tier: item.tier,
					badge_label: indicators.badge_label,
					display_trust_score: indicators.display_trust_score,
				}
			})
			.collect();
		let total = items.len();

		tracing::info!(
			%trace_id,
			category = intent.category.as_str(),
			location = intent.location.as_str(),
			total,
			"Search completed."
		);

		Ok(SearchResponse { trace_id, intent, total, items })
	}

	/// Never fails; any oracle problem degrades to the deterministic fallback.
	pub async fn resolve_intent(&self, input: &QueryInput) -> SearchIntent {
		intent::resolve(&self.cfg.providers.intent, self.providers.intent.as_ref(), input).await
	}
}
