//! HTTP transport for admission lookups
//!
//! A thin axum layer over `LookupService`: JSON body and query-parameter
//! search routes, a health check and a service description.

pub mod routes;
pub mod server;

pub use routes::{HealthResponse, SearchParams, SearchRequest, ServiceInfo, create_router};
pub use server::{AppState, HttpServer};
