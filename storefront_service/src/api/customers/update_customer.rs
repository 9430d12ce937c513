use axum::Json;
use axum::extract::{Path, State};
use model::customer::Customer;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::customers::update::{CustomerUpdate, update_customer};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;

/// Full-row replace; the same fields are required as at creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[utoipa::path(put,
    tag = "customers",
    operation_id = "update_customer",
    path = "/customers/{customer_id}",
    params(("customer_id" = String, Path, description = "The id of the customer")),
    responses(
    (status = 200, body = DataResponse<Customer>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<Json<DataResponse<Customer>>, ApiError> {
    let name = req.name.filter(|name| !name.trim().is_empty());
    let email = req.email.filter(|email| !email.trim().is_empty());
    let (Some(name), Some(email)) = (name, email) else {
        return Err(ApiError::Validation("Name and email are required".to_string()));
    };

    let customer = update_customer(
        &state.db,
        &customer_id,
        CustomerUpdate {
            name,
            email,
            phone: req.phone,
            address: req.address,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::NotFound => ApiError::NotFound("Customer not found".to_string()),
        DbError::Duplicate => ApiError::Duplicate("Email already exists".to_string()),
        e => {
            tracing::error!(error = ?e, "unable to update customer");
            ApiError::Internal("Failed to update customer".to_string())
        }
    })?;

    Ok(Json(DataResponse::new(customer)))
}
