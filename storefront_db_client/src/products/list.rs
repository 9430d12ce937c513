use model::product::Product;
use sqlx::SqlitePool;

use crate::error::DbError;

pub async fn list_products(db: &SqlitePool) -> Result<Vec<Product>, DbError> {
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT * FROM products ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::create::{NewProduct, create_product};
    use crate::testing;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let db = testing::pool().await;
        let products = list_products(&db).await.expect("list");
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn lists_created_products() {
        let db = testing::pool().await;
        for name in ["Mug", "Shirt", "Poster"] {
            create_product(
                &db,
                NewProduct {
                    name: name.to_string(),
                    description: None,
                    price: 9.99,
                    stock: None,
                    image_url: None,
                },
            )
            .await
            .expect("create");
        }

        let products = list_products(&db).await.expect("list");
        assert_eq!(products.len(), 3);
    }
}
