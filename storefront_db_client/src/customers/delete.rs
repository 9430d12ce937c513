use sqlx::SqlitePool;

use crate::error::DbError;

/// Deletes the row; the store cascades dependent customer_products.
#[tracing::instrument(skip(db))]
pub async fn delete_customer(db: &SqlitePool, id: &str) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM customers WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_products::create::{NewCustomerProduct, create_customer_product};
    use crate::customers::create::{NewCustomer, create_customer};
    use crate::products::create::{NewProduct, create_product};
    use crate::testing;

    #[tokio::test]
    async fn delete_cascades_purchases() {
        let db = testing::pool().await;

        let customer = create_customer(
            &db,
            NewCustomer {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
                address: None,
            },
        )
        .await
        .expect("customer");

        let product = create_product(
            &db,
            NewProduct {
                name: "Mug".to_string(),
                description: None,
                price: 3.0,
                stock: Some(1),
                image_url: None,
            },
        )
        .await
        .expect("product");

        create_customer_product(
            &db,
            NewCustomerProduct {
                customer_id: customer.id.clone(),
                product_id: product.id.clone(),
                quantity: Some(2),
            },
        )
        .await
        .expect("purchase");

        delete_customer(&db, &customer.id).await.expect("delete");

        let purchases: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer_products")
            .fetch_one(&db)
            .await
            .expect("count");
        assert_eq!(purchases, 0);

        // the product itself is untouched
        let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&db)
            .await
            .expect("count products");
        assert_eq!(products, 1);
    }
}
