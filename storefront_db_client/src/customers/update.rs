use model::customer::Customer;
use sqlx::SqlitePool;

use crate::customers::get::get_customer;
use crate::error::DbError;

#[derive(Debug)]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Full-row replace, checked by re-select.
#[tracing::instrument(skip(db))]
pub async fn update_customer(
    db: &SqlitePool,
    id: &str,
    update: CustomerUpdate,
) -> Result<Customer, DbError> {
    sqlx::query(
        r#"
        UPDATE customers
        SET name = ?, email = ?, phone = ?, address = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&update.name)
    .bind(&update.email)
    .bind(update.phone.unwrap_or_default())
    .bind(update.address.unwrap_or_default())
    .bind(id)
    .execute(db)
    .await?;

    get_customer(db, id).await
}
