use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};

use confia_domain::catalog;
use confia_service::{
	Error as ServiceError, SearchRequest, SearchResponse, SummaryRequest, SummaryResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/search", post(search))
		.route("/v1/profile/summary", post(profile_summary))
		.route("/v1/suggestions/cities", get(suggest_cities))
		.route("/v1/catalog/services", get(catalog_services))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(payload).await?;
	Ok(Json(response))
}

async fn profile_summary(
	State(state): State<AppState>,
	Json(payload): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
	let response = state.service.profile_summary(payload).await?;
	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct SuggestQuery {
	#[serde(default)]
	q: String,
}

#[derive(Debug, Serialize)]
struct SuggestionsResponse {
	suggestions: Vec<&'static str>,
}

async fn suggest_cities(
	State(state): State<AppState>,
	Query(query): Query<SuggestQuery>,
) -> Json<SuggestionsResponse> {
	let limit = state.service.cfg.search.suggestion_limit as usize;

	Json(SuggestionsResponse { suggestions: catalog::suggest_cities(&query.q, limit) })
}

#[derive(Debug, Serialize)]
struct ServicesResponse {
	services: Vec<&'static str>,
}

async fn catalog_services() -> Json<ServicesResponse> {
	Json(ServicesResponse { services: catalog::services() })
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "invalid_request"),
			ServiceError::Store { .. } => (StatusCode::BAD_GATEWAY, "store_unavailable"),
			ServiceError::Provider { .. } => (StatusCode::BAD_GATEWAY, "provider_error"),
		};

		Self { status, error_code: error_code.to_string(), message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
