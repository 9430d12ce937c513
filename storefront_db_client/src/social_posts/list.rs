use model::social::SocialPost;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn list_social_posts(db: &SqlitePool) -> Result<Vec<SocialPost>, DbError> {
    let posts = sqlx::query_as::<_, SocialPost>(
        r#"
        SELECT sp.*, p.name AS product_name
        FROM social_posts sp
        LEFT JOIN products p ON sp.product_id = p.id
        ORDER BY sp.created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(posts)
}
