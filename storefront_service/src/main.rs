mod api;
mod config;
mod entrypoint;

use std::sync::Arc;

use anyhow::Context;
use sqlx::SqlitePool;

use crate::api::chat::{AdvisoryService, GeminiAdvisor};
use crate::api::context::AppState;
use crate::config::{Config, Environment};
use crate::entrypoint::Entrypoint;

async fn connect_to_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let max_connections: u32 = match config.environment {
        Environment::Production => 10,
        Environment::Develop => 5,
        Environment::Local => 5,
    };

    let db = storefront_db_client::connect(&config.database_url, max_connections)
        .await
        .context("could not connect to db")?;

    // create-if-absent on every cold start; failure here is fatal
    storefront_db_client::initialize(&db)
        .await
        .context("unable to initialize database schema")?;

    Ok(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Entrypoint::default().init();

    let config = Config::from_env().context("expected to be able to generate config")?;

    let db = connect_to_database(&config).await?;

    tracing::trace!("initialized db connection and schema");

    let advisor: Arc<dyn AdvisoryService> = Arc::new(GeminiAdvisor::from_env());

    api::setup_and_serve(AppState {
        config: Arc::new(config),
        db,
        advisor,
    })
    .await?;
    Ok(())
}
