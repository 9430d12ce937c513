use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use model::response::DataResponse;
use model::social::{PostStatus, SocialPost};
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::social_posts::update::{SocialPostUpdate, update_social_post};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::social_posts::create_social_post::parse_platform;

/// Full-row replace of the editable columns; the product reference and
/// image are fixed at creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSocialPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    /// facebook | instagram | twitter | linkedin | tiktok
    pub platform: Option<String>,
    /// draft | scheduled | published
    pub status: Option<String>,
    pub scheduled_at: Option<String>,
}

#[utoipa::path(put,
    tag = "social-posts",
    operation_id = "update_social_post",
    path = "/social-posts/{post_id}",
    params(("post_id" = String, Path, description = "The id of the social post")),
    responses(
    (status = 200, body = DataResponse<SocialPost>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 404, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(req): Json<UpdateSocialPostRequest>,
) -> Result<Json<DataResponse<SocialPost>>, ApiError> {
    let title = req.title.filter(|title| !title.trim().is_empty());
    let content = req.content.filter(|content| !content.trim().is_empty());
    let (Some(title), Some(content), Some(platform), Some(status)) =
        (title, content, req.platform, req.status)
    else {
        return Err(ApiError::Validation(
            "Title, content, platform, and status are required".to_string(),
        ));
    };

    let platform = parse_platform(&platform)?;
    let status = PostStatus::from_str(&status).map_err(|_| {
        ApiError::Validation("Status must be one of draft, scheduled, published".to_string())
    })?;

    let post = update_social_post(
        &state.db,
        &post_id,
        SocialPostUpdate {
            title,
            content,
            platform,
            status,
            scheduled_at: req.scheduled_at,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::NotFound => ApiError::NotFound("Social post not found".to_string()),
        e => {
            tracing::error!(error = ?e, "unable to update social post");
            ApiError::Internal("Failed to update social post".to_string())
        }
    })?;

    Ok(Json(DataResponse::new(post)))
}
