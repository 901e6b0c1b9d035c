use confia_domain::{
	intent::SearchIntent,
	professional::{ProfessionalRecord, TrustLevel},
};

use crate::search::FacetFilters;

/// Pure predicate pass over the population. Tags never filter; they only
/// weigh in during ranking.
pub(crate) fn filter(
	population: &[ProfessionalRecord],
	intent: &SearchIntent,
	facets: &FacetFilters,
	raw_query: &str,
) -> Vec<ProfessionalRecord> {
	let category = intent.category.trim().to_lowercase();
	let location = intent.location.trim().to_lowercase();
	let raw = raw_query.trim().to_lowercase();
	let min_rating = clamp_min_rating(facets.min_rating);

	population
		.iter()
		.filter(|record| {
			let category_ok =
				category.is_empty() || record.category.to_lowercase().contains(&category);
			let location_ok =
				location.is_empty() || record.location.to_lowercase().contains(&location);
			let mut matched = category_ok && location_ok;

			// Quick-search fallback: a location-less category miss still
			// matches on name, category, or biography against the raw text.
			if !matched && !category.is_empty() && location.is_empty() && !raw.is_empty() {
				matched = record.name.to_lowercase().contains(&raw)
					|| record.category.to_lowercase().contains(&raw)
					|| record.about.to_lowercase().contains(&raw);
			}

			matched
				&& (!facets.elite_only || record.trust_level == TrustLevel::Elite)
				&& record.rating >= min_rating
				&& (!facets.online_only || record.online)
		})
		.cloned()
		.collect()
}

fn clamp_min_rating(min_rating: Option<f64>) -> f64 {
	let raw = min_rating.unwrap_or(0.0);

	if raw.is_finite() { raw.clamp(0.0, 5.0) } else { 0.0 }
}
