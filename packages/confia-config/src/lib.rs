mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, LlmProviderConfig, Providers, Search, Service, Store};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.store.api_base.trim().is_empty() {
		return Err(Error::Validation { message: "store.api_base must be non-empty.".to_string() });
	}
	if cfg.store.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "store.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (label, provider) in
		[("intent", &cfg.providers.intent), ("summary", &cfg.providers.summary)]
	{
		if provider.api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("providers.{label}.api_base must be non-empty."),
			});
		}
		if provider.api_key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("providers.{label}.api_key must be non-empty."),
			});
		}
		if provider.timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("providers.{label}.timeout_ms must be greater than zero."),
			});
		}
		if !provider.temperature.is_finite() || provider.temperature < 0.0 {
			return Err(Error::Validation {
				message: format!(
					"providers.{label}.temperature must be a finite number, zero or greater."
				),
			});
		}
	}

	if !cfg.search.featured_threshold.is_finite() {
		return Err(Error::Validation {
			message: "search.featured_threshold must be a finite number.".to_string(),
		});
	}
	if !(0.0..=5.0).contains(&cfg.search.featured_threshold) {
		return Err(Error::Validation {
			message: "search.featured_threshold must be in the range 0.0-5.0.".to_string(),
		});
	}
	if cfg.search.suggestion_limit == 0 {
		return Err(Error::Validation {
			message: "search.suggestion_limit must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.store.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.store.api_key = None;
	}
}
