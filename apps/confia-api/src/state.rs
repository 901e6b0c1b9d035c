use std::sync::Arc;

use confia_service::ConfiaService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<ConfiaService>,
}
impl AppState {
	pub fn new(config: confia_config::Config) -> Self {
		Self { service: Arc::new(ConfiaService::new(config)) }
	}

	pub fn with_service(service: ConfiaService) -> Self {
		Self { service: Arc::new(service) }
	}
}
