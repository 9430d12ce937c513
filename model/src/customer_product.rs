use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchase relationship row joined with the customer and product it
/// references. All reads of this table carry the joined fields.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CustomerProduct {
    pub id: String,
    pub customer_id: String,
    pub product_id: String,
    /// Positive, defaults to 1
    pub quantity: i64,
    pub purchase_date: NaiveDateTime,
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    pub product_price: f64,
}
