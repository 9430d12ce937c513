use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use model::customer_product::CustomerProduct;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::customer_products::create::{
    NewCustomerProduct, create_customer_product,
};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerProductRequest {
    pub customer_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

#[utoipa::path(post,
    tag = "customer-products",
    operation_id = "create_customer_product",
    path = "/customer-products",
    responses(
    (status = 201, body = DataResponse<CustomerProduct>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomerProductRequest>,
) -> Result<(StatusCode, Json<DataResponse<CustomerProduct>>), ApiError> {
    let (Some(customer_id), Some(product_id)) = (req.customer_id, req.product_id) else {
        return Err(ApiError::Validation(
            "Customer ID and Product ID are required".to_string(),
        ));
    };

    if req.quantity.is_some_and(|quantity| quantity < 1) {
        return Err(ApiError::Validation(
            "Quantity must be positive".to_string(),
        ));
    }

    let purchase = create_customer_product(
        &state.db,
        NewCustomerProduct {
            customer_id,
            product_id,
            quantity: req.quantity,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::ForeignKey => {
            ApiError::Validation("Customer or product does not exist".to_string())
        }
        e => {
            tracing::error!(error = ?e, "unable to create customer product");
            ApiError::Internal("Failed to create customer product relationship".to_string())
        }
    })?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(purchase))))
}
