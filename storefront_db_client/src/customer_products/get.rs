use model::customer_product::CustomerProduct;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn get_customer_product(db: &SqlitePool, id: &str) -> Result<CustomerProduct, DbError> {
    let purchase = sqlx::query_as::<_, CustomerProduct>(
        r#"
        SELECT cp.*,
               c.name AS customer_name, c.email AS customer_email,
               p.name AS product_name, p.price AS product_price
        FROM customer_products cp
        JOIN customers c ON cp.customer_id = c.id
        JOIN products p ON cp.product_id = p.id
        WHERE cp.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    purchase.ok_or(DbError::NotFound)
}
