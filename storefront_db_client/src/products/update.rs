use model::product::Product;
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::products::get::get_product;

#[derive(Debug)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
}

/// Full-row replace. Success is decided by re-selecting the row, not by the
/// write's reported row count.
#[tracing::instrument(skip(db))]
pub async fn update_product(
    db: &SqlitePool,
    id: &str,
    update: ProductUpdate,
) -> Result<Product, DbError> {
    sqlx::query(
        r#"
        UPDATE products
        SET name = ?, description = ?, price = ?, stock = ?, image_url = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&update.name)
    .bind(update.description.unwrap_or_default())
    .bind(update.price)
    .bind(update.stock.unwrap_or(0))
    .bind(update.image_url.unwrap_or_default())
    .bind(id)
    .execute(db)
    .await?;

    get_product(db, id).await
}
