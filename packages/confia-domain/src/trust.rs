use crate::professional::{ProfessionalRecord, TrustLevel};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrustIndicators {
	pub badge_label: &'static str,
	pub display_trust_score: u8,
}

/// Display-level trust indicators for one record. Total over any record,
/// including loosely-typed ones from the external store.
pub fn derive_display(record: &ProfessionalRecord) -> TrustIndicators {
	TrustIndicators {
		badge_label: badge_label(record.trust_level),
		display_trust_score: display_trust_score(record),
	}
}

pub fn badge_label(level: TrustLevel) -> &'static str {
	match level {
		TrustLevel::Unverified => "Não Verificado",
		TrustLevel::Verified => "Verificado",
		TrustLevel::Gold => "Ouro",
		TrustLevel::Diamond => "Diamante",
		TrustLevel::Elite => "Elite",
	}
}

/// Stored trust score when it is present and plausible; otherwise the rating
/// projected onto the 0-100 scale.
pub fn display_trust_score(record: &ProfessionalRecord) -> u8 {
	if let Some(score) = record.trust_score
		&& (0.0..=100.0).contains(&score)
	{
		return score.round() as u8;
	}

	(record.rating / 5.0 * 100.0).round().clamp(0.0, 100.0) as u8
}
