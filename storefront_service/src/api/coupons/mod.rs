use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod create_coupon;
pub mod delete_coupon;
pub mod get_coupons;
pub mod update_coupon;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_coupons::handler))
        .route("/", post(create_coupon::handler))
        .route("/:coupon_id", put(update_coupon::handler))
        .route("/:coupon_id", delete(delete_coupon::handler))
}
