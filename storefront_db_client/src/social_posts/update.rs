use model::social::{Platform, PostStatus, SocialPost};
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::social_posts::get::get_social_post;

#[derive(Debug)]
pub struct SocialPostUpdate {
    pub title: String,
    pub content: String,
    pub platform: Platform,
    pub status: PostStatus,
    pub scheduled_at: Option<String>,
}

/// Full-row replace of the editable columns, checked by re-select. The
/// product reference and image are fixed at creation.
#[tracing::instrument(skip(db))]
pub async fn update_social_post(
    db: &SqlitePool,
    id: &str,
    update: SocialPostUpdate,
) -> Result<SocialPost, DbError> {
    sqlx::query(
        r#"
        UPDATE social_posts
        SET title = ?, content = ?, platform = ?, status = ?, scheduled_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&update.title)
    .bind(&update.content)
    .bind(update.platform)
    .bind(update.status)
    .bind(&update.scheduled_at)
    .bind(id)
    .execute(db)
    .await?;

    get_social_post(db, id).await
}
