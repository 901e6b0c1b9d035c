use confia_domain::{
	professional::{ProfessionalRecord, TrustLevel},
	trust,
};

#[test]
fn decodes_store_documents_with_extra_and_missing_fields() {
	let raw = serde_json::json!({
		"id": "p-3",
		"name": "Mariana Lima",
		"category": "Passadeira",
		"rating": 4.8,
		"reviewCount": 12,
		"location": "Pinheiros, SP",
		"trustLevel": "VERIFIED",
		"responseTime": "1 hora",
		"online": false,
		"portfolio": ["https://example.com/a.jpg"],
		"plan": "free"
	});
	let record: ProfessionalRecord = serde_json::from_value(raw).expect("tolerant decode");

	assert_eq!(record.id, "p-3");
	assert_eq!(record.trust_level, TrustLevel::Verified);
	assert!(record.tags.is_empty());
	assert!(record.trust_score.is_none());
	assert_eq!(record.about, "");
}

#[test]
fn unknown_trust_level_reads_as_unverified() {
	let raw = serde_json::json!({ "id": "p-9", "name": "X", "trustLevel": "TITANIUM" });
	let record: ProfessionalRecord = serde_json::from_value(raw).expect("decode");

	assert_eq!(record.trust_level, TrustLevel::Unverified);
	assert_eq!(trust::badge_label(record.trust_level), "Não Verificado");
}

#[test]
fn null_trust_level_reads_as_unverified() {
	let raw = serde_json::json!({ "id": "p-10", "name": "Y", "trustLevel": null });
	let record: ProfessionalRecord = serde_json::from_value(raw).expect("decode");

	assert_eq!(record.trust_level, TrustLevel::Unverified);
}

#[test]
fn derive_display_combines_badge_and_score() {
	let raw = serde_json::json!({
		"id": "p-1",
		"name": "Ana Silva",
		"rating": 4.0,
		"trustLevel": "GOLD"
	});
	let record: ProfessionalRecord = serde_json::from_value(raw).expect("decode");
	let indicators = trust::derive_display(&record);

	assert_eq!(indicators.badge_label, "Ouro");
	assert_eq!(indicators.display_trust_score, 80);
}
