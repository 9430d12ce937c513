use model::coupon::Coupon;
use sqlx::SqlitePool;

use crate::coupons::get::get_coupon;
use crate::error::DbError;

#[derive(Debug)]
pub struct CouponUpdate {
    pub code: String,
    pub discount_percentage: f64,
    pub valid_until: String,
    pub is_active: bool,
}

/// Full-row replace of the mutable columns, checked by re-select. The
/// product reference is fixed at creation.
#[tracing::instrument(skip(db))]
pub async fn update_coupon(
    db: &SqlitePool,
    id: &str,
    update: CouponUpdate,
) -> Result<Coupon, DbError> {
    sqlx::query(
        r#"
        UPDATE coupons
        SET code = ?, discount_percentage = ?, valid_until = ?, is_active = ?
        WHERE id = ?
        "#,
    )
    .bind(&update.code)
    .bind(update.discount_percentage)
    .bind(&update.valid_until)
    .bind(update.is_active)
    .bind(id)
    .execute(db)
    .await?;

    get_coupon(db, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupons::create::{NewCoupon, create_coupon};
    use crate::products::create::{NewProduct, create_product};
    use crate::testing;

    #[tokio::test]
    async fn replaces_and_deactivates() {
        let db = testing::pool().await;

        let product = create_product(
            &db,
            NewProduct {
                name: "Mug".to_string(),
                description: None,
                price: 12.5,
                stock: Some(5),
                image_url: None,
            },
        )
        .await
        .expect("product");

        let coupon = create_coupon(
            &db,
            NewCoupon {
                code: "MUG10".to_string(),
                product_id: product.id,
                discount_percentage: 10.0,
                valid_until: "2030-01-01 00:00:00".to_string(),
            },
        )
        .await
        .expect("coupon");

        let updated = update_coupon(
            &db,
            &coupon.id,
            CouponUpdate {
                code: "MUG25".to_string(),
                discount_percentage: 25.0,
                valid_until: "2031-01-01 00:00:00".to_string(),
                is_active: false,
            },
        )
        .await
        .expect("update");

        assert_eq!(updated.code, "MUG25");
        assert_eq!(updated.discount_percentage, 25.0);
        assert!(!updated.is_active);
        assert_eq!(updated.product_name, "Mug");
    }

    #[tokio::test]
    async fn missing_row_is_not_found() {
        let db = testing::pool().await;
        let err = update_coupon(
            &db,
            "no-such-id",
            CouponUpdate {
                code: "X".to_string(),
                discount_percentage: 5.0,
                valid_until: "2030-01-01 00:00:00".to_string(),
                is_active: true,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }
}
