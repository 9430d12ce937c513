use axum::Json;
use axum::extract::State;
use model::customer::CustomerWithPurchases;
use model::response::DataResponse;
use storefront_db_client::customers::list::list_customers;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(get,
    tag = "customers",
    operation_id = "get_customers",
    path = "/customers",
    responses(
    (status = 200, body = DataResponse<Vec<CustomerWithPurchases>>),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<CustomerWithPurchases>>>, ApiError> {
    let customers = list_customers(&state.db).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to list customers");
        ApiError::Internal("Failed to fetch customers".to_string())
    })?;

    Ok(Json(DataResponse::new(customers)))
}
