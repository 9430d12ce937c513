use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod create_social_post;
pub mod delete_social_post;
pub mod get_social_posts;
pub mod update_social_post;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_social_posts::handler))
        .route("/", post(create_social_post::handler))
        .route("/:post_id", put(update_social_post::handler))
        .route("/:post_id", delete(delete_social_post::handler))
}
