use axum::{Router, routing::get};

pub mod products;
pub mod system;

/// Router for catalog endpoints.
pub fn router() -> Router {
    Router::new().route("/products", get(products::list_products))
}
