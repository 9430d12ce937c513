use model::coupon::Coupon;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn get_coupon(db: &SqlitePool, id: &str) -> Result<Coupon, DbError> {
    let coupon = sqlx::query_as::<_, Coupon>(
        r#"
        SELECT c.*, p.name AS product_name, p.price AS product_price
        FROM coupons c
        JOIN products p ON c.product_id = p.id
        WHERE c.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    coupon.ok_or(DbError::NotFound)
}
