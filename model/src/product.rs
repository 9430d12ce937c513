use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product row as stored, including the store-assigned timestamps.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Product {
    /// Opaque unique id, assigned at insert time
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Unit price, non-negative
    pub price: f64,
    /// Units on hand, non-negative
    pub stock: i64,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
