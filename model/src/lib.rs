//! Shared row types, enums and response envelopes for the storefront
//! services. Everything here is serializable and maps directly onto the
//! tables owned by `storefront_db_client`.

pub mod chat;
pub mod coupon;
pub mod customer;
pub mod customer_product;
pub mod product;
pub mod response;
pub mod social;
