use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A coupon row joined with the product it discounts. Coupons always
/// reference an existing product, so the joined fields are non-optional.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Coupon {
    pub id: String,
    /// Unique redemption code
    pub code: String,
    pub product_id: String,
    /// Percentage discount within 1..=100
    pub discount_percentage: f64,
    pub valid_from: NaiveDateTime,
    /// Client-supplied expiry, stored verbatim
    pub valid_until: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub product_name: String,
    pub product_price: f64,
}
