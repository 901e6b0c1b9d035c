use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use confia_domain::{
	intent::{SearchIntent, tag_overlap},
	professional::ProfessionalRecord,
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
	Featured,
	Standard,
}

#[derive(Clone, Debug)]
pub(crate) struct RankedProfessional {
	pub(crate) record: ProfessionalRecord,
	pub(crate) rank: usize,
	pub(crate) tier: Tier,
}

/// Deterministic multi-key ordering. The id tie-break makes the comparator
/// total, so equal inputs always produce byte-identical output.
pub(crate) fn rank(
	matches: Vec<ProfessionalRecord>,
	intent: &SearchIntent,
	featured_threshold: f64,
) -> Vec<RankedProfessional> {
	let mut scored: Vec<(usize, ProfessionalRecord)> = matches
		.into_iter()
		.map(|record| (tag_overlap(&intent.tags, &record.tags), record))
		.collect();

	scored.sort_by(|(overlap_a, a), (overlap_b, b)| compare(a, *overlap_a, b, *overlap_b));

	scored
		.into_iter()
		.enumerate()
		.map(|(rank, (_, record))| {
			let tier = if rank == 0 && record.rating >= featured_threshold {
				Tier::Featured
			} else {
				Tier::Standard
			};

			RankedProfessional { record, rank, tier }
		})
		.collect()
}

fn compare(
	a: &ProfessionalRecord,
	overlap_a: usize,
	b: &ProfessionalRecord,
	overlap_b: usize,
) -> Ordering {
	b.trust_level
		.cmp(&a.trust_level)
		.then_with(|| overlap_b.cmp(&overlap_a))
		.then_with(|| b.rating.total_cmp(&a.rating))
		.then_with(|| b.review_count.cmp(&a.review_count))
		.then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
	use confia_domain::professional::TrustLevel;

	use super::*;

	fn record(id: &str, level: TrustLevel, rating: f64, review_count: u32) -> ProfessionalRecord {
		ProfessionalRecord {
			id: id.to_string(),
			name: format!("Profissional {id}"),
			rating,
			review_count,
			trust_level: level,
			..Default::default()
		}
	}

	#[test]
	fn trust_level_dominates_rating() {
		let matches = vec![
			record("p-1", TrustLevel::Gold, 5.0, 500),
			record("p-2", TrustLevel::Elite, 4.6, 10),
		];
		let ranked = rank(matches, &SearchIntent::default(), 4.5);

		assert_eq!(ranked[0].record.id, "p-2");
		assert_eq!(ranked[0].rank, 0);
		assert_eq!(ranked[1].rank, 1);
	}

	#[test]
	fn tag_overlap_breaks_trust_level_ties() {
		let mut first = record("p-1", TrustLevel::Gold, 4.9, 80);
		let mut second = record("p-2", TrustLevel::Gold, 4.5, 20);
		first.tags = vec!["organização".to_string()];
		second.tags = vec!["limpeza".to_string(), "passadoria".to_string()];
		let intent = SearchIntent {
			category: String::new(),
			location: String::new(),
			tags: vec!["Limpeza".to_string(), "passadoria".to_string()],
		};
		let ranked = rank(vec![first, second], &intent, 4.5);

		assert_eq!(ranked[0].record.id, "p-2");
	}

	#[test]
	fn id_breaks_full_ties_ascending() {
		let matches = vec![
			record("p-9", TrustLevel::Verified, 4.2, 30),
			record("p-1", TrustLevel::Verified, 4.2, 30),
			record("p-5", TrustLevel::Verified, 4.2, 30),
		];
		let ranked = rank(matches, &SearchIntent::default(), 4.5);
		let ids: Vec<&str> = ranked.iter().map(|r| r.record.id.as_str()).collect();

		assert_eq!(ids, vec!["p-1", "p-5", "p-9"]);
	}

	#[test]
	fn only_a_strong_top_result_is_featured() {
		let strong = rank(vec![record("p-1", TrustLevel::Elite, 4.5, 10)], &SearchIntent::default(), 4.5);
		let weak = rank(vec![record("p-1", TrustLevel::Elite, 4.4, 10)], &SearchIntent::default(), 4.5);

		assert_eq!(strong[0].tier, Tier::Featured);
		assert_eq!(weak[0].tier, Tier::Standard);
	}

	#[test]
	fn at_most_one_featured_record() {
		let matches = vec![
			record("p-1", TrustLevel::Elite, 5.0, 100),
			record("p-2", TrustLevel::Elite, 5.0, 100),
			record("p-3", TrustLevel::Elite, 4.9, 90),
		];
		let ranked = rank(matches, &SearchIntent::default(), 4.5);
		let featured = ranked.iter().filter(|r| r.tier == Tier::Featured).count();

		assert_eq!(featured, 1);
		assert_eq!(ranked.iter().position(|r| r.tier == Tier::Featured), Some(0));
	}

	#[test]
	fn ranking_is_idempotent_across_permutations() {
		let a = record("p-1", TrustLevel::Gold, 4.9, 84);
		let b = record("p-2", TrustLevel::Elite, 5.0, 142);
		let c = record("p-3", TrustLevel::Verified, 4.7, 51);
		let forward = rank(vec![a.clone(), b.clone(), c.clone()], &SearchIntent::default(), 4.5);
		let reverse = rank(vec![c, a, b], &SearchIntent::default(), 4.5);
		let forward_ids: Vec<&str> = forward.iter().map(|r| r.record.id.as_str()).collect();
		let reverse_ids: Vec<&str> = reverse.iter().map(|r| r.record.id.as_str()).collect();

		assert_eq!(forward_ids, reverse_ids);
		assert_eq!(forward_ids, vec!["p-2", "p-1", "p-3"]);
	}
}
