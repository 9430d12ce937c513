use model::coupon::Coupon;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn list_coupons(db: &SqlitePool) -> Result<Vec<Coupon>, DbError> {
    let coupons = sqlx::query_as::<_, Coupon>(
        r#"
        SELECT c.*, p.name AS product_name, p.price AS product_price
        FROM coupons c
        JOIN products p ON c.product_id = p.id
        ORDER BY c.created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(coupons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let db = testing::pool().await;
        let coupons = list_coupons(&db).await.expect("list");
        assert!(coupons.is_empty());
    }
}
