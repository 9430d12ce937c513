use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::api::chat::AdvisoryService;
use crate::config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: SqlitePool,
    pub advisor: Arc<dyn AdvisoryService>,
}

impl AppState {
    #[cfg(test)]
    pub async fn new_testing(advisor: Arc<dyn AdvisoryService>) -> Self {
        let db = storefront_db_client::connect("sqlite::memory:", 1)
            .await
            .expect("in-memory pool");
        storefront_db_client::initialize(&db)
            .await
            .expect("schema");

        AppState {
            config: Arc::new(Config::new_testing()),
            db,
            advisor,
        }
    }
}
