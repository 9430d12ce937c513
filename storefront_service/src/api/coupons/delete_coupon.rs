use axum::Json;
use axum::extract::{Path, State};
use model::response::MessageResponse;
use storefront_db_client::DbError;
use storefront_db_client::coupons::delete::delete_coupon;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(delete,
    tag = "coupons",
    operation_id = "delete_coupon",
    path = "/coupons/{coupon_id}",
    params(("coupon_id" = String, Path, description = "The id of the coupon")),
    responses(
    (status = 200, body = MessageResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
    Path(coupon_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_coupon(&state.db, &coupon_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound => ApiError::NotFound("Coupon not found".to_string()),
            e => {
                tracing::error!(error = ?e, "unable to delete coupon");
                ApiError::Internal("Failed to delete coupon".to_string())
            }
        })?;

    Ok(Json(MessageResponse::new("Coupon deleted successfully")))
}
