use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use catalog_products::RawFilter;

use crate::app::errors;
use crate::app::services::AppServices;

/// `GET /products?category=..&priceLessThan=..`
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let raw = RawFilter::from_pairs(params);

    match services.catalog.list_products(&raw).await {
        Ok(priced) => {
            let payload = services.formatter.format_response(&priced);
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}
