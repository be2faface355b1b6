use crate::models::{CreateProduct, Product, ProductSummary};
use crate::services::catalog;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Stockroom product catalog API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

#[derive(Deserialize)]
pub struct ListParams {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
    pub brand: Option<String>,
}

/// GET /api/v1/products
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ProductSummary>>> {
    let catalog_cfg = &state.config.catalog;
    let skip = params.skip.unwrap_or(0);
    let limit = params
        .limit
        .unwrap_or(catalog_cfg.default_page_size)
        .clamp(1, catalog_cfg.max_page_size);

    let products = catalog::list_products(&state.db, params.brand.as_deref(), skip, limit)?;
    Ok(Json(products))
}

/// GET /api/v1/products/:id
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = catalog::get_product(&state.db, id)?;
    Ok(Json(product))
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = catalog::create_product(&state.db, &input)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /api/v1/products/:id
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    catalog::delete_product(&state.db, id)?;
    Ok(StatusCode::NO_CONTENT)
}
