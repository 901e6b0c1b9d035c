pub mod search;
pub mod summary;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use confia_config::{Config, LlmProviderConfig};
use confia_domain::professional::ProfessionalRecord;
use confia_providers::{intent, summary as summary_provider};
use confia_storage::records::{RecordQuery, RecordStore};
pub use error::{Error, Result};
pub use search::{FacetFilters, RankedResult, SearchRequest, SearchResponse, Tier};
pub use summary::{SummaryRequest, SummaryResponse};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait IntentProvider
where
	Self: Send + Sync,
{
	fn interpret<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>>;
}

pub trait SummaryProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

pub trait RecordSource
where
	Self: Send + Sync,
{
	fn fetch<'a>(
		&'a self,
		query: &'a RecordQuery,
	) -> BoxFuture<'a, confia_storage::Result<Vec<ProfessionalRecord>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub intent: Arc<dyn IntentProvider>,
	pub summary: Arc<dyn SummaryProvider>,
}

pub struct ConfiaService {
	pub cfg: Config,
	pub store: Arc<dyn RecordSource>,
	pub providers: Providers,
}

struct DefaultProviders;

impl IntentProvider for DefaultProviders {
	fn interpret<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>> {
		Box::pin(intent::interpret(cfg, messages))
	}
}

impl SummaryProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(summary_provider::complete(cfg, messages))
	}
}

impl RecordSource for RecordStore {
	fn fetch<'a>(
		&'a self,
		query: &'a RecordQuery,
	) -> BoxFuture<'a, confia_storage::Result<Vec<ProfessionalRecord>>> {
		Box::pin(self.fetch_professionals(query))
	}
}

impl Providers {
	pub fn new(intent: Arc<dyn IntentProvider>, summary: Arc<dyn SummaryProvider>) -> Self {
		Self { intent, summary }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);
		Self { intent: provider.clone(), summary: provider }
	}
}

impl ConfiaService {
	pub fn new(cfg: Config) -> Self {
		let store = Arc::new(RecordStore::new(cfg.store.clone()));
		Self { cfg, store, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		let store = Arc::new(RecordStore::new(cfg.store.clone()));
		Self { cfg, store, providers }
	}

	pub fn with_source(cfg: Config, store: Arc<dyn RecordSource>, providers: Providers) -> Self {
		Self { cfg, store, providers }
	}
}
