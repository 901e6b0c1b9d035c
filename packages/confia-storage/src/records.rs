use std::time::Duration;

use confia_domain::professional::ProfessionalRecord;
use reqwest::{
	Client,
	header::{AUTHORIZATION, HeaderMap, HeaderName},
};
use serde_json::Value;

use crate::{Error, Result};

/// Optional push-down filters for the record store. The store treats these as
/// exact-prefix hints; the pipeline still applies its own matching on top.
#[derive(Clone, Debug, Default)]
pub struct RecordQuery {
	pub category: Option<String>,
	pub active_only: bool,
	pub location_prefix: Option<String>,
}

/// HTTP client for the professional record store.
#[derive(Clone, Debug)]
pub struct RecordStore {
	cfg: confia_config::Store,
}

impl RecordStore {
	pub fn new(cfg: confia_config::Store) -> Self {
		Self { cfg }
	}

	pub async fn fetch_professionals(&self, query: &RecordQuery) -> Result<Vec<ProfessionalRecord>> {
		let client =
			Client::builder().timeout(Duration::from_millis(self.cfg.timeout_ms)).build()?;
		let url = format!("{}{}", self.cfg.api_base, self.cfg.path);
		let mut params = Vec::new();

		if let Some(category) = &query.category {
			params.push(("category", category.clone()));
		}
		if query.active_only {
			params.push(("active", "true".to_string()));
		}
		if let Some(prefix) = &query.location_prefix {
			params.push(("locationPrefix", prefix.clone()));
		}

		let res = client
			.get(url)
			.headers(self.headers()?)
			.query(&params)
			.send()
			.await?
			.error_for_status()?;
		let json: Value = res.json().await?;

		decode_documents(json)
	}

	fn headers(&self) -> Result<HeaderMap> {
		let mut headers = HeaderMap::new();

		if let Some(api_key) = &self.cfg.api_key {
			headers.insert(
				AUTHORIZATION,
				format!("Bearer {api_key}").parse().map_err(|_| {
					Error::UnexpectedResponse("Store api key is not a valid header value.".into())
				})?,
			);
		}
		for (key, value) in &self.cfg.default_headers {
			let Some(raw) = value.as_str() else {
				return Err(Error::UnexpectedResponse(
					"Store default header values must be strings.".into(),
				));
			};
			let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
				Error::UnexpectedResponse(format!("Invalid store header name: {key}."))
			})?;
			headers.insert(
				name,
				raw.parse().map_err(|_| {
					Error::UnexpectedResponse(format!("Invalid store header value for {key}."))
				})?,
			);
		}

		Ok(headers)
	}
}

/// Accepts both response shapes the store emits, a bare array and an object
/// wrapping it under `documents`. Individual documents that fail to decode are
/// skipped with a warning instead of failing the whole fetch.
fn decode_documents(json: Value) -> Result<Vec<ProfessionalRecord>> {
	let documents = match json {
		Value::Array(items) => items,
		Value::Object(mut map) => match map.remove("documents") {
			Some(Value::Array(items)) => items,
			_ =>
				return Err(Error::UnexpectedResponse(
					"Store response object is missing a documents array.".into(),
				)),
		},
		_ =>
			return Err(Error::UnexpectedResponse(
				"Store response is neither an array nor an object.".into(),
			)),
	};
	let mut records = Vec::with_capacity(documents.len());

	for document in documents {
		match serde_json::from_value::<ProfessionalRecord>(document) {
			Ok(record) => records.push(record),
			Err(err) => tracing::warn!(error = %err, "Skipping undecodable store document."),
		}
	}

	Ok(records)
}
