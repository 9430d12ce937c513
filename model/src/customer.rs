use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// Unique across the store
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A customer row joined with its purchase aggregates.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CustomerWithPurchases {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Number of customer_products rows for this customer
    pub total_purchases: i64,
    /// Comma-concatenated names of the purchased products, if any
    pub purchased_products: Option<String>,
}
