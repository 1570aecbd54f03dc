use crate::config::AppConfig;
use crate::meals::repo::PgMealStore;
use crate::meals::store::{InMemoryMealStore, MealStore};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn MealStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = PgMealStore::connect(&config.database_url, config.max_connections)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(store.pool()).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        Ok(Self::from_parts(config, Arc::new(store)))
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn MealStore>) -> Self {
        Self { config, store }
    }

    /// State over an empty in-memory store.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::from_parts(Arc::new(config), Arc::new(InMemoryMealStore::new()))
    }

    pub async fn shutdown(&self) {
        self.store.close().await;
        tracing::info!("meal store closed");
    }
}
