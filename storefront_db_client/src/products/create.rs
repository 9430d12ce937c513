use model::product::Product;
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::ids;
use crate::products::get::get_product;

#[derive(Debug)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i64>,
    pub image_url: Option<String>,
}

/// Inserts the product and returns the read-back row; the read-back is
/// authoritative because the store assigns timestamps and defaults.
#[tracing::instrument(skip(db))]
pub async fn create_product(db: &SqlitePool, new: NewProduct) -> Result<Product, DbError> {
    let id = ids::generate_id();

    sqlx::query(
        r#"
        INSERT INTO products (id, name, description, price, stock, image_url)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.name)
    .bind(new.description.unwrap_or_default())
    .bind(new.price)
    .bind(new.stock.unwrap_or(0))
    .bind(new.image_url.unwrap_or_default())
    .execute(db)
    .await?;

    get_product(db, &id).await
}
