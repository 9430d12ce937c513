use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod get_products;
pub mod update_product;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_products::handler))
        .route("/", post(create_product::handler))
        .route("/:product_id", get(get_product::handler))
        .route("/:product_id", put(update_product::handler))
        .route("/:product_id", delete(delete_product::handler))
}
