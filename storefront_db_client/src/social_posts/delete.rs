use sqlx::SqlitePool;

use crate::error::DbError;

#[tracing::instrument(skip(db))]
pub async fn delete_social_post(db: &SqlitePool, id: &str) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM social_posts WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
