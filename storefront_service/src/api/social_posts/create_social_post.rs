use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use model::response::DataResponse;
use model::social::{Platform, SocialPost};
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::social_posts::create::{NewSocialPost, create_social_post};
use utoipa::ToSchema;

use crate::api::context::AppState;
use crate::api::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSocialPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    /// facebook | instagram | twitter | linkedin | tiktok
    pub platform: Option<String>,
    pub product_id: Option<String>,
    pub image_url: Option<String>,
    pub scheduled_at: Option<String>,
}

/// Platform arrives as a string so membership failures map to the uniform
/// 400 envelope rather than a body-rejection.
pub(crate) fn parse_platform(platform: &str) -> Result<Platform, ApiError> {
    Platform::from_str(platform).map_err(|_| {
        ApiError::Validation(
            "Platform must be one of facebook, instagram, twitter, linkedin, tiktok".to_string(),
        )
    })
}

#[utoipa::path(post,
    tag = "social-posts",
    operation_id = "create_social_post",
    path = "/social-posts",
    responses(
    (status = 201, body = DataResponse<SocialPost>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Json(req): Json<CreateSocialPostRequest>,
) -> Result<(StatusCode, Json<DataResponse<SocialPost>>), ApiError> {
    let title = req.title.filter(|title| !title.trim().is_empty());
    let content = req.content.filter(|content| !content.trim().is_empty());
    let (Some(title), Some(content), Some(platform)) = (title, content, req.platform) else {
        return Err(ApiError::Validation(
            "Title, content, and platform are required".to_string(),
        ));
    };

    let platform = parse_platform(&platform)?;

    let post = create_social_post(
        &state.db,
        NewSocialPost {
            title,
            content,
            platform,
            product_id: req.product_id,
            image_url: req.image_url,
            scheduled_at: req.scheduled_at,
        },
    )
    .await
    .map_err(|e| match e {
        DbError::ForeignKey => ApiError::Validation("Product does not exist".to_string()),
        e => {
            tracing::error!(error = ?e, "unable to create social post");
            ApiError::Internal("Failed to create social post".to_string())
        }
    })?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(post))))
}
