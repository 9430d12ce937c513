//! Database errors for storefront operations

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the given id
    #[error("no matching row")]
    NotFound,

    /// A unique constraint (customer email, coupon code) was violated
    #[error("unique constraint violated")]
    Duplicate,

    /// A referenced row (customer or product) does not exist
    #[error("referenced row does not exist")]
    ForeignKey,

    #[error("query error: {0}")]
    Query(sqlx::Error),

    /// Schema creation or pool construction failed; fatal at startup
    #[error("unable to initialize store: {0}")]
    Init(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return DbError::Duplicate;
            }
            if db_err.is_foreign_key_violation() {
                return DbError::ForeignKey;
            }
        }
        DbError::Query(err)
    }
}
