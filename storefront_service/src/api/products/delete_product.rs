use axum::Json;
use axum::extract::{Path, State};
use model::response::MessageResponse;
use storefront_db_client::DbError;
use storefront_db_client::products::delete::delete_product;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(delete,
    tag = "products",
    operation_id = "delete_product",
    path = "/products/{product_id}",
    params(("product_id" = String, Path, description = "The id of the product")),
    responses(
    (status = 200, body = MessageResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_product(&state.db, &product_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound => ApiError::NotFound("Product not found".to_string()),
            e => {
                tracing::error!(error = ?e, "unable to delete product");
                ApiError::Internal("Failed to delete product".to_string())
            }
        })?;

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
