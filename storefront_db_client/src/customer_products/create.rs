use model::customer_product::CustomerProduct;
use sqlx::SqlitePool;

use crate::customer_products::get::get_customer_product;
use crate::error::DbError;
use crate::ids;

#[derive(Debug)]
pub struct NewCustomerProduct {
    pub customer_id: String,
    pub product_id: String,
    pub quantity: Option<i64>,
}

/// Inserts the purchase row. Both referenced rows must exist; the store
/// rejects dangling references as [DbError::ForeignKey].
#[tracing::instrument(skip(db))]
pub async fn create_customer_product(
    db: &SqlitePool,
    new: NewCustomerProduct,
) -> Result<CustomerProduct, DbError> {
    let id = ids::generate_id();

    sqlx::query(
        r#"
        INSERT INTO customer_products (id, customer_id, product_id, quantity)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.customer_id)
    .bind(&new.product_id)
    .bind(new.quantity.unwrap_or(1))
    .execute(db)
    .await?;

    get_customer_product(db, &id).await
}
