use axum::Json;
use axum::extract::State;
use model::customer_product::CustomerProduct;
use model::response::DataResponse;
use storefront_db_client::customer_products::list::list_customer_products;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(get,
    tag = "customer-products",
    operation_id = "get_customer_products",
    path = "/customer-products",
    responses(
    (status = 200, body = DataResponse<Vec<CustomerProduct>>),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<CustomerProduct>>>, ApiError> {
    let purchases = list_customer_products(&state.db).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to list customer products");
        ApiError::Internal("Failed to fetch customer products".to_string())
    })?;

    Ok(Json(DataResponse::new(purchases)))
}
