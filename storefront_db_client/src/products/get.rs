use model::product::Product;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn get_product(db: &SqlitePool, id: &str) -> Result<Product, DbError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT * FROM products WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    product.ok_or(DbError::NotFound)
}
