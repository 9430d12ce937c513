use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use model::coupon::Coupon;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::coupons::create::{NewCoupon, create_coupon};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCouponRequest {
    pub code: Option<String>,
    pub product_id: Option<String>,
    pub discount_percentage: Option<f64>,
    pub valid_until: Option<String>,
}

pub(crate) fn validate_discount(discount: f64) -> Result<(), ApiError> {
    if !(1.0..=100.0).contains(&discount) {
        return Err(ApiError::Validation(
            "Discount percentage must be between 1 and 100".to_string(),
        ));
    }
    Ok(())
}

#[utoipa::path(post,
    tag = "coupons",
    operation_id = "create_coupon",
    path = "/coupons",
    responses(
    (status = 201, body = DataResponse<Coupon>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCouponRequest>,
) -> Result<(StatusCode, Json<DataResponse<Coupon>>), ApiError> {
    let code = req.code.filter(|code| !code.trim().is_empty());
    let (Some(code), Some(product_id), Some(discount_percentage), Some(valid_until)) =
        (code, req.product_id, req.discount_percentage, req.valid_until)
    else {
        return Err(ApiError::Validation(
            "Code, product ID, discount percentage, and valid until date are required".to_string(),
        ));
    };

    validate_discount(discount_percentage)?;

    let coupon = create_coupon(
        &state.db,
        NewCoupon {
            code,
            product_id,
            discount_percentage,
            valid_until,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::Duplicate => ApiError::Duplicate("Coupon code already exists".to_string()),
        DbError::ForeignKey => ApiError::Validation("Product does not exist".to_string()),
        e => {
            tracing::error!(error = ?e, "unable to create coupon");
            ApiError::Internal("Failed to create coupon".to_string())
        }
    })?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(coupon))))
}
