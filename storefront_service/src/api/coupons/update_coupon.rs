use axum::Json;
use axum::extract::{Path, State};
use model::coupon::Coupon;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::coupons::update::{CouponUpdate, update_coupon};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::coupons::create_coupon::validate_discount;
use crate::api::error::ApiError;

/// Full-row replace of the mutable columns; the product reference is fixed
/// at creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateCouponRequest {
    pub code: Option<String>,
    pub discount_percentage: Option<f64>,
    pub valid_until: Option<String>,
    pub is_active: Option<bool>,
}

#[utoipa::path(put,
    tag = "coupons",
    operation_id = "update_coupon",
    path = "/coupons/{coupon_id}",
    params(("coupon_id" = String, Path, description = "The id of the coupon")),
    responses(
    (status = 200, body = DataResponse<Coupon>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Path(coupon_id): Path<String>,
    Json(req): Json<UpdateCouponRequest>,
) -> Result<Json<DataResponse<Coupon>>, ApiError> {
    let code = req.code.filter(|code| !code.trim().is_empty());
    let (Some(code), Some(discount_percentage), Some(valid_until), Some(is_active)) = (
        code,
        req.discount_percentage,
        req.valid_until,
        req.is_active,
    ) else {
        return Err(ApiError::Validation(
            "Code, discount percentage, valid until date, and active flag are required"
                .to_string(),
        ));
    };

    validate_discount(discount_percentage)?;

    let coupon = update_coupon(
        &state.db,
        &coupon_id,
        CouponUpdate {
            code,
            discount_percentage,
            valid_until,
            is_active,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::NotFound => ApiError::NotFound("Coupon not found".to_string()),
        DbError::Duplicate => ApiError::Duplicate("Coupon code already exists".to_string()),
        e => {
            tracing::error!(error = ?e, "unable to update coupon");
            ApiError::Internal("Failed to update coupon".to_string())
        }
    })?;

    Ok(Json(DataResponse::new(coupon)))
}
