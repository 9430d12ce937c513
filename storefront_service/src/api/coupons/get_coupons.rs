use axum::Json;
use axum::extract::State;
use model::coupon::Coupon;
use model::response::DataResponse;
use storefront_db_client::coupons::list::list_coupons;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(get,
    tag = "coupons",
    operation_id = "get_coupons",
    path = "/coupons",
    responses(
    (status = 200, body = DataResponse<Vec<Coupon>>),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Coupon>>>, ApiError> {
    let coupons = list_coupons(&state.db).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to list coupons");
        ApiError::Internal("Failed to fetch coupons".to_string())
    })?;

    Ok(Json(DataResponse::new(coupons)))
}
