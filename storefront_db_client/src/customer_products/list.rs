use model::customer_product::CustomerProduct;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn list_customer_products(db: &SqlitePool) -> Result<Vec<CustomerProduct>, DbError> {
    let purchases = sqlx::query_as::<_, CustomerProduct>(
        r#"
        SELECT cp.*,
               c.name AS customer_name, c.email AS customer_email,
               p.name AS product_name, p.price AS product_price
        FROM customer_products cp
        JOIN customers c ON cp.customer_id = c.id
        JOIN products p ON cp.product_id = p.id
        ORDER BY cp.purchase_date DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(purchases)
}
