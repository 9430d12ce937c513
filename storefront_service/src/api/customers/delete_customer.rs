use axum::Json;
use axum::extract::{Path, State};
use model::response::MessageResponse;
use storefront_db_client::DbError;
use storefront_db_client::customers::delete::delete_customer;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(delete,
    tag = "customers",
    operation_id = "delete_customer",
    path = "/customers/{customer_id}",
    params(("customer_id" = String, Path, description = "The id of the customer")),
    responses(
    (status = 200, body = MessageResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_customer(&state.db, &customer_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound => ApiError::NotFound("Customer not found".to_string()),
            e => {
                tracing::error!(error = ?e, "unable to delete customer");
                ApiError::Internal("Failed to delete customer".to_string())
            }
        })?;

    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}
