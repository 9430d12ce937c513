use axum::Json;
use axum::extract::{Path, State};
use model::product::Product;
use model::response::DataResponse;
use storefront_db_client::DbError;
use storefront_db_client::products::get::get_product;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(get,
    tag = "products",
    operation_id = "get_product",
    path = "/products/{product_id}",
    params(("product_id" = String, Path, description = "The id of the product")),
    responses(
    (status = 200, body = DataResponse<Product>),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<DataResponse<Product>>, ApiError> {
    let product = get_product(&state.db, &product_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound => ApiError::NotFound("Product not found".to_string()),
            e => {
                tracing::error!(error = ?e, "unable to fetch product");
                ApiError::Internal("Failed to fetch product".to_string())
            }
        })?;

    Ok(Json(DataResponse::new(product)))
}
