use model::social::SocialPost;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn get_social_post(db: &SqlitePool, id: &str) -> Result<SocialPost, DbError> {
    let post = sqlx::query_as::<_, SocialPost>(
        r#"
        SELECT sp.*, p.name AS product_name
        FROM social_posts sp
        LEFT JOIN products p ON sp.product_id = p.id
        WHERE sp.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    post.ok_or(DbError::NotFound)
}
