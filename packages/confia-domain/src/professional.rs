use serde::{Deserialize, Deserializer, Serialize};

/// Ordered badge classification; the primary ranking key. Declaration order
/// is the ordinal order.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustLevel {
	#[default]
	Unverified,
	Verified,
	Gold,
	Diamond,
	Elite,
}
impl TrustLevel {
	pub fn from_label(label: &str) -> Self {
		match label.trim().to_ascii_uppercase().as_str() {
			"VERIFIED" => Self::Verified,
			"GOLD" => Self::Gold,
			"DIAMOND" => Self::Diamond,
			"ELITE" => Self::Elite,
			_ => Self::Unverified,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unverified => "UNVERIFIED",
			Self::Verified => "VERIFIED",
			Self::Gold => "GOLD",
			Self::Diamond => "DIAMOND",
			Self::Elite => "ELITE",
		}
	}
}

impl<'de> Deserialize<'de> for TrustLevel {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		// Levels arrive from an externally owned store; anything unrecognized
		// reads as the lowest badge instead of failing the record.
		let label = Option::<String>::deserialize(deserializer)?;

		Ok(label.as_deref().map(Self::from_label).unwrap_or_default())
	}
}

/// One service provider, as stored by the external record store. Documents
/// use camelCase keys; every field except `id` defaults when absent and
/// unknown keys are ignored. The pipeline never mutates a record, it only
/// derives display values from it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalRecord {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub about: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub avatar: String,
	#[serde(default)]
	pub rating: f64,
	#[serde(default)]
	pub review_count: u32,
	#[serde(default)]
	pub trust_level: TrustLevel,
	#[serde(default)]
	pub trust_score: Option<f64>,
	#[serde(default)]
	pub recommendation_rate: Option<f64>,
	#[serde(default)]
	pub online: bool,
	#[serde(default)]
	pub response_time: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trust_levels_order_by_ordinal() {
		assert!(TrustLevel::Unverified < TrustLevel::Verified);
		assert!(TrustLevel::Verified < TrustLevel::Gold);
		assert!(TrustLevel::Gold < TrustLevel::Diamond);
		assert!(TrustLevel::Diamond < TrustLevel::Elite);
	}

	#[test]
	fn unrecognized_label_maps_to_unverified() {
		assert_eq!(TrustLevel::from_label("PLATINUM"), TrustLevel::Unverified);
		assert_eq!(TrustLevel::from_label(""), TrustLevel::Unverified);
		assert_eq!(TrustLevel::from_label(" elite "), TrustLevel::Elite);
	}
}
