use axum::Json;
use axum::extract::State;
use model::product::Product;
use model::response::DataResponse;
use storefront_db_client::products::list::list_products;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(get,
    tag = "products",
    operation_id = "get_products",
    path = "/products",
    responses(
    (status = 200, body = DataResponse<Vec<Product>>),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Product>>>, ApiError> {
    let products = list_products(&state.db).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to list products");
        ApiError::Internal("Failed to fetch products".to_string())
    })?;

    Ok(Json(DataResponse::new(products)))
}
