use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use model::product::Product;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::products::create::{NewProduct, create_product};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
}

#[utoipa::path(post,
    tag = "products",
    operation_id = "create_product",
    path = "/products",
    responses(
    (status = 201, body = DataResponse<Product>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<DataResponse<Product>>), ApiError> {
    let name = req.name.filter(|name| !name.trim().is_empty());
    let (Some(name), Some(price)) = (name, req.price) else {
        return Err(ApiError::Validation("Name and price are required".to_string()));
    };

    if price < 0.0 {
        return Err(ApiError::Validation(
            "Price must be non-negative".to_string(),
        ));
    }
    if req.stock.is_some_and(|stock| stock < 0) {
        return Err(ApiError::Validation(
            "Stock must be non-negative".to_string(),
        ));
    }

    let product = create_product(
        &state.db,
        NewProduct {
            name,
            description: req.description,
            price,
            stock: req.stock,
            image_url: req.image_url,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = ?e, "unable to create product");
        ApiError::Internal("Failed to create product".to_string())
    })?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(product))))
}
