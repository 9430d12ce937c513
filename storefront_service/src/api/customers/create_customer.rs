use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use model::customer::Customer;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::customers::create::{NewCustomer, create_customer};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[utoipa::path(post,
    tag = "customers",
    operation_id = "create_customer",
    path = "/customers",
    responses(
    (status = 201, body = DataResponse<Customer>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<DataResponse<Customer>>), ApiError> {
    let name = req.name.filter(|name| !name.trim().is_empty());
    let email = req.email.filter(|email| !email.trim().is_empty());
    let (Some(name), Some(email)) = (name, email) else {
        return Err(ApiError::Validation("Name and email are required".to_string()));
    };

    let customer = create_customer(
        &state.db,
        NewCustomer {
            name,
            email,
            phone: req.phone,
            address: req.address,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::Duplicate => ApiError::Duplicate("Email already exists".to_string()),
        e => {
            tracing::error!(error = ?e, "unable to create customer");
            ApiError::Internal("Failed to create customer".to_string())
        }
    })?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(customer))))
}
