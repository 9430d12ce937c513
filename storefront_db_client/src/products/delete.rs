use sqlx::SqlitePool;

use crate::error::DbError;

/// Deletes the row; the store cascades dependent customer_products and
/// coupons and nulls social_posts references.
#[tracing::instrument(skip(db))]
pub async fn delete_product(db: &SqlitePool, id: &str) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
