use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub search: SearchStatus,
    pub catalog: CatalogStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatus {
    /// "configured" or "unconfigured".
    pub status: String,
    pub project_id: String,
    pub search_engine_id: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatus {
    pub path: String,
    pub articles: usize,
}

/// `GET /api/v1/health`
///
/// Reports configuration only; it does not call the search service.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let search = &state.config.search;
    let search_status = SearchStatus {
        status: if search.is_configured() {
            "configured".to_string()
        } else {
            "unconfigured".to_string()
        },
        project_id: search.project_id.clone(),
        search_engine_id: search.search_engine_id.clone(),
        location: search.location.clone(),
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        search: search_status,
        catalog: CatalogStatus {
            path: state.catalog.path().display().to_string(),
            articles: state.catalog.len(),
        },
    })
}
