use model::customer::CustomerWithPurchases;
use sqlx::SqlitePool;

use crate::error::DbError;

/// Every customer joined with its purchase count and the names of the
/// products it purchased.
pub async fn list_customers(db: &SqlitePool) -> Result<Vec<CustomerWithPurchases>, DbError> {
    let customers = sqlx::query_as::<_, CustomerWithPurchases>(
        r#"
        SELECT c.*,
               COUNT(cp.id) AS total_purchases,
               GROUP_CONCAT(p.name) AS purchased_products
        FROM customers c
        LEFT JOIN customer_products cp ON c.id = cp.customer_id
        LEFT JOIN products p ON cp.product_id = p.id
        GROUP BY c.id
        ORDER BY c.created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(customers)
}
