//! Route table and request handlers
//!
//! Search handlers always answer with HTTP 200; the outcome travels in the
//! `code` field of the body.

use super::server::AppState;
use crate::app::models::StudentQuery;
use crate::app::services::lookup::LookupResponse;
use crate::constants::{SERVICE_MESSAGE, SERVICE_VERSION};
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// JSON body accepted by `POST /api/search`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchRequest {
    pub student_id: String,
    pub name: String,
}

impl SearchRequest {
    /// Decode a request body as JSON, whatever its declared content type
    ///
    /// Both fields are required and must be non-empty.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        let request: SearchRequest = serde_json::from_slice(body).map_err(|e| e.to_string())?;
        if request.student_id.is_empty() {
            return Err("field `student_id` must not be empty".to_string());
        }
        if request.name.is_empty() {
            return Err("field `name` must not be empty".to_string());
        }
        Ok(request)
    }
}

impl From<SearchRequest> for StudentQuery {
    fn from(request: SearchRequest) -> Self {
        StudentQuery::new(request.student_id, request.name)
    }
}

/// Query parameters accepted by `GET /api/search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchParams {
    pub student_id: Option<String>,
    pub name: Option<String>,
}

impl From<SearchParams> for StudentQuery {
    fn from(params: SearchParams) -> Self {
        StudentQuery::new(
            params.student_id.unwrap_or_default(),
            params.name.unwrap_or_default(),
        )
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub total_records: usize,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Build the route table
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/api/search", get(search_by_params).post(search_by_body))
        .with_state(state)
}

// ============================================================================
// Search Handlers
// ============================================================================

/// Search with a JSON body
///
/// The `Content-Type` header is not checked; any body that decodes as a
/// search request is accepted.
pub async fn search_by_body(State(state): State<AppState>, body: Bytes) -> Json<LookupResponse> {
    let response = match SearchRequest::from_body(&body) {
        Ok(request) => state.lookup.search(&StudentQuery::from(request)),
        Err(message) => {
            debug!("Rejected search body: {}", message);
            LookupResponse::invalid_body(message)
        }
    };
    Json(response)
}

/// Search with `student_id` and `name` query parameters
pub async fn search_by_params(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Json<LookupResponse> {
    let query: StudentQuery = match params {
        Ok(Query(params)) => params.into(),
        Err(rejection) => {
            debug!("Rejected search parameters: {}", rejection.body_text());
            StudentQuery::default()
        }
    };
    Json(state.lookup.search(&query))
}

// ============================================================================
// Service Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        total_records: state.lookup.record_count(),
    })
}

/// Service description endpoint
pub async fn service_info() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("POST /api/search", "查询学生信息 (JSON)"),
        ("GET /api/search", "查询学生信息 (URL参数)"),
        ("GET /health", "健康检查"),
    ]);

    Json(ServiceInfo {
        message: SERVICE_MESSAGE,
        version: SERVICE_VERSION,
        endpoints,
    })
}
