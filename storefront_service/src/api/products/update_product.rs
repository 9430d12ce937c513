use axum::Json;
use axum::extract::{Path, State};
use model::product::Product;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::products::update::{ProductUpdate, update_product};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;

/// Full-row replace; the same fields are required as at creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
}

#[utoipa::path(put,
    tag = "products",
    operation_id = "update_product",
    path = "/products/{product_id}",
    params(("product_id" = String, Path, description = "The id of the product")),
    responses(
    (status = 200, body = DataResponse<Product>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<DataResponse<Product>>, ApiError> {
    let name = req.name.filter(|name| !name.trim().is_empty());
    let (Some(name), Some(price)) = (name, req.price) else {
        return Err(ApiError::Validation("Name and price are required".to_string()));
    };

    if price < 0.0 {
        return Err(ApiError::Validation(
            "Price must be non-negative".to_string(),
        ));
    }
    if req.stock.is_some_and(|stock| stock < 0) {
        return Err(ApiError::Validation(
            "Stock must be non-negative".to_string(),
        ));
    }

    let product = update_product(
        &state.db,
        &product_id,
        ProductUpdate {
            name,
            description: req.description,
            price,
            stock: req.stock,
            image_url: req.image_url,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::NotFound => ApiError::NotFound("Product not found".to_string()),
        e => {
            tracing::error!(error = ?e, "unable to update product");
            ApiError::Internal("Failed to update product".to_string())
        }
    })?;

    Ok(Json(DataResponse::new(product)))
}
