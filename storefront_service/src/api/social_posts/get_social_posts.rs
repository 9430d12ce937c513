use axum::Json;
use axum::extract::State;
use model::response::DataResponse;
use model::social::SocialPost;
use storefront_db_client::social_posts::list::list_social_posts;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[utoipa::path(get,
    tag = "social-posts",
    operation_id = "get_social_posts",
    path = "/social-posts",
    responses(
    (status = 200, body = DataResponse<Vec<SocialPost>>),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<SocialPost>>>, ApiError> {
    let posts = list_social_posts(&state.db).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to list social posts");
        ApiError::Internal("Failed to fetch social posts".to_string())
    })?;

    Ok(Json(DataResponse::new(posts)))
}
