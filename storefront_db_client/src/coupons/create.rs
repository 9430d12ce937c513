use model::coupon::Coupon;
use sqlx::SqlitePool;

use crate::coupons::get::get_coupon;
use crate::error::DbError;
use crate::ids;

#[derive(Debug)]
pub struct NewCoupon {
    pub code: String,
    pub product_id: String,
    pub discount_percentage: f64,
    pub valid_until: String,
}

/// Inserts the coupon and returns the read-back row joined with its
/// product. A duplicate code surfaces as [DbError::Duplicate]; a dangling
/// product reference as [DbError::ForeignKey].
#[tracing::instrument(skip(db))]
pub async fn create_coupon(db: &SqlitePool, new: NewCoupon) -> Result<Coupon, DbError> {
    let id = ids::generate_id();

    sqlx::query(
        r#"
        INSERT INTO coupons (id, code, product_id, discount_percentage, valid_until)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&new.code)
    .bind(&new.product_id)
    .bind(new.discount_percentage)
    .bind(&new.valid_until)
    .execute(db)
    .await?;

    get_coupon(db, &id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::create::{NewProduct, create_product};
    use crate::testing;

    async fn seeded_product_id(db: &sqlx::SqlitePool) -> String {
        create_product(
            db,
            NewProduct {
                name: "Mug".to_string(),
                description: None,
                price: 12.5,
                stock: Some(5),
                image_url: None,
            },
        )
        .await
        .expect("product")
        .id
    }

    #[tokio::test]
    async fn read_back_joins_product_and_defaults_active() {
        let db = testing::pool().await;
        let product_id = seeded_product_id(&db).await;

        let coupon = create_coupon(
            &db,
            NewCoupon {
                code: "MUG10".to_string(),
                product_id,
                discount_percentage: 10.0,
                valid_until: "2030-01-01 00:00:00".to_string(),
            },
        )
        .await
        .expect("coupon");

        assert!(coupon.is_active);
        assert_eq!(coupon.product_name, "Mug");
        assert_eq!(coupon.product_price, 12.5);
        assert_eq!(coupon.discount_percentage, 10.0);
    }

    #[tokio::test]
    async fn duplicate_code_is_rejected() {
        let db = testing::pool().await;
        let product_id = seeded_product_id(&db).await;

        create_coupon(
            &db,
            NewCoupon {
                code: "MUG10".to_string(),
                product_id: product_id.clone(),
                discount_percentage: 10.0,
                valid_until: "2030-01-01 00:00:00".to_string(),
            },
        )
        .await
        .expect("first coupon");

        let err = create_coupon(
            &db,
            NewCoupon {
                code: "MUG10".to_string(),
                product_id,
                discount_percentage: 20.0,
                valid_until: "2030-01-01 00:00:00".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, DbError::Duplicate));
    }
}
