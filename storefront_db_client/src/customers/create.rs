use model::customer::Customer;
use sqlx::SqlitePool;

use crate::customers::get::get_customer;
use crate::error::DbError;
use crate::ids;

#[derive(Debug)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Inserts the customer and returns the read-back row. A duplicate email
/// surfaces as [DbError::Duplicate] with nothing persisted.
#[tracing::instrument(skip(db))]
pub async fn create_customer(db: &SqlitePool, new: NewCustomer) -> Result<Customer, DbError> {
    let id = ids::generate_id();

    sqlx::query(
        r#"
        INSERT INTO customers (id, name, email, phone, address)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(new.phone.unwrap_or_default())
    .bind(new.address.unwrap_or_default())
    .execute(db)
    .await?;

    get_customer(db, &id).await
}
