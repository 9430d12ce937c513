use model::customer::{Customer, CustomerWithPurchases};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Plain row fetch, used for write read-backs.
pub async fn get_customer(db: &SqlitePool, id: &str) -> Result<Customer, DbError> {
    let customer = sqlx::query_as::<_, Customer>(
        r#"
        SELECT * FROM customers WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    customer.ok_or(DbError::NotFound)
}

/// Single customer with the same purchase aggregates as the list.
pub async fn get_customer_with_purchases(
    db: &SqlitePool,
    id: &str,
) -> Result<CustomerWithPurchases, DbError> {
    let customer = sqlx::query_as::<_, CustomerWithPurchases>(
        r#"
        SELECT c.*,
               COUNT(cp.id) AS total_purchases,
               GROUP_CONCAT(p.name) AS purchased_products
        FROM customers c
        LEFT JOIN customer_products cp ON c.id = cp.customer_id
        LEFT JOIN products p ON cp.product_id = p.id
        WHERE c.id = ?
        GROUP BY c.id
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    customer.ok_or(DbError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_products::create::{NewCustomerProduct, create_customer_product};
    use crate::customers::create::{NewCustomer, create_customer};
    use crate::products::create::{NewProduct, create_product};
    use crate::testing;

    #[tokio::test]
    async fn aggregates_count_and_concatenate_purchases() {
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

        for name in ["Mug", "Shirt"] {
            let product = create_product(
                &db,
                NewProduct {
                    name: name.to_string(),
                    description: None,
                    price: 5.0,
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
                    product_id: product.id,
                    quantity: None,
                },
            )
            .await
            .expect("purchase");
        }

        let detailed = get_customer_with_purchases(&db, &customer.id)
            .await
            .expect("get");
        assert_eq!(detailed.total_purchases, 2);
        let purchased = detailed.purchased_products.expect("purchased products");
        assert!(purchased.contains("Mug"));
        assert!(purchased.contains("Shirt"));
    }

    #[tokio::test]
    async fn missing_customer_is_not_found() {
        let db = testing::pool().await;
        let err = get_customer_with_purchases(&db, "no-such-id")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }
}
