use model::social::{Platform, SocialPost};
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::ids;
use crate::social_posts::get::get_social_post;

#[derive(Debug)]
pub struct NewSocialPost {
    pub title: String,
    pub content: String,
    pub platform: Platform,
    pub product_id: Option<String>,
    pub image_url: Option<String>,
    pub scheduled_at: Option<String>,
}

/// Inserts the post; `status` is assigned by the store (draft).
#[tracing::instrument(skip(db))]
pub async fn create_social_post(db: &SqlitePool, new: NewSocialPost) -> Result<SocialPost, DbError> {
    let id = ids::generate_id();

    sqlx::query(
        r#"
        INSERT INTO social_posts (id, title, content, platform, product_id, image_url, scheduled_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.title)
    .bind(&new.content)
    .bind(new.platform)
    .bind(&new.product_id)
    .bind(&new.image_url)
    .bind(&new.scheduled_at)
    .execute(db)
    .await?;

    get_social_post(db, &id).await
}
