//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog service (filter parsing, store query, pricing) and its wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs and the payload formatter
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
