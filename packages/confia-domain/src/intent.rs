use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Normalized representation of what a user is searching for. Empty string
/// or empty list means "no constraint". Built fresh per request, never
/// persisted.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SearchIntent {
	pub category: String,
	pub location: String,
	pub tags: Vec<String>,
}
impl SearchIntent {
	/// Maps an already-separated service/location pair; no inference involved.
	pub fn explicit(service: &str, location: &str) -> Self {
		Self {
			category: service.trim().to_string(),
			location: location.trim().to_string(),
			tags: Vec::new(),
		}
	}

	/// Terminal behavior when the inference oracle is unavailable: the raw
	/// query text becomes the category constraint.
	pub fn fallback(raw: &str) -> Self {
		Self { category: raw.to_string(), location: String::new(), tags: Vec::new() }
	}

	pub fn is_unconstrained(&self) -> bool {
		self.category.is_empty() && self.location.is_empty() && self.tags.is_empty()
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExplicitQuery {
	pub service: String,
	pub location: String,
}

#[derive(Clone, Debug)]
pub enum QueryInput {
	FreeText(String),
	Explicit(ExplicitQuery),
}

/// Shared-tag count between an intent and a record, case-insensitive and
/// deduplicated on the intent side. A weighting signal only, never a filter.
pub fn tag_overlap(intent_tags: &[String], record_tags: &[String]) -> usize {
	if intent_tags.is_empty() || record_tags.is_empty() {
		return 0;
	}

	let record_tags: HashSet<String> =
		record_tags.iter().map(|tag| tag.trim().to_lowercase()).collect();
	let intent_tags: HashSet<String> =
		intent_tags.iter().map(|tag| tag.trim().to_lowercase()).collect();

	intent_tags.iter().filter(|tag| record_tags.contains(*tag)).count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_trims_both_fields() {
		let intent = SearchIntent::explicit("  Limpeza ", " Moema, SP ");

		assert_eq!(intent.category, "Limpeza");
		assert_eq!(intent.location, "Moema, SP");
		assert!(intent.tags.is_empty());
	}

	#[test]
	fn overlap_is_case_insensitive_and_deduplicated() {
		let intent = vec!["limpeza".to_string(), "LIMPEZA".to_string(), "gesso".to_string()];
		let record = vec!["Limpeza".to_string(), "Organização".to_string()];

		assert_eq!(tag_overlap(&intent, &record), 1);
		assert_eq!(tag_overlap(&[], &record), 0);
	}
}
