//! Data access for the storefront store: schema lifecycle plus one
//! repository module per table. Every operation is a single parameterized
//! statement against the shared pool; relational integrity (cascades,
//! set-null, uniqueness) is enforced by the store itself.

pub mod chat_messages;
pub mod coupons;
pub mod customer_products;
pub mod customers;
pub mod error;
pub mod ids;
pub mod products;
pub mod schema;
pub mod social_posts;

pub use error::DbError;
pub use schema::{connect, initialize};
