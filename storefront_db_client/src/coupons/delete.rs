use sqlx::SqlitePool;

use crate::error::DbError;

#[tracing::instrument(skip(db))]
pub async fn delete_coupon(db: &SqlitePool, id: &str) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM coupons WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn missing_row_is_not_found() {
        let db = testing::pool().await;
        let err = delete_coupon(&db, "no-such-id").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }
}
