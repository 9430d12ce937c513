use axum::Json;
use axum::extract::{Path, State};
use model::customer::CustomerWithPurchases;
use model::response::DataResponse;
use storefront_db_client::DbError;
use storefront_db_client::customers::get::get_customer_with_purchases;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(get,
    tag = "customers",
    operation_id = "get_customer",
    path = "/customers/{customer_id}",
    params(("customer_id" = String, Path, description = "The id of the customer")),
    responses(
    (status = 200, body = DataResponse<CustomerWithPurchases>),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<DataResponse<CustomerWithPurchases>>, ApiError> {
    let customer = get_customer_with_purchases(&state.db, &customer_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound => ApiError::NotFound("Customer not found".to_string()),
            e => {
                tracing::error!(error = ?e, "unable to fetch customer");
                ApiError::Internal("Failed to fetch customer".to_string())
            }
        })?;

    Ok(Json(DataResponse::new(customer)))
}
