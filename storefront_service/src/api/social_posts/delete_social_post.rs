use axum::Json;
use axum::extract::{Path, State};
use model::response::MessageResponse;
use storefront_db_client::DbError;
use storefront_db_client::social_posts::delete::delete_social_post;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(delete,
    tag = "social-posts",
    operation_id = "delete_social_post",
    path = "/social-posts/{post_id}",
    params(("post_id" = String, Path, description = "The id of the social post")),
    responses(
    (status = 200, body = MessageResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_social_post(&state.db, &post_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound => ApiError::NotFound("Social post not found".to_string()),
            e => {
                tracing::error!(error = ?e, "unable to delete social post");
                ApiError::Internal("Failed to delete social post".to_string())
            }
        })?;

    Ok(Json(MessageResponse::new("Social post deleted successfully")))
}
