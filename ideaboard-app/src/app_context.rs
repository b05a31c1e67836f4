use crate::config::StoreConfig;
use crate::infrastructure::db::{self, IdeaRepository};
use crate::infrastructure::memory::MemoryIdeaStore;
use crate::store::IdeaStore;
use sea_orm::DbErr;
use std::env;
use std::sync::Arc;

/// Shared application state: the injected idea store.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<IdeaStore>,
}

impl AppContext {
    pub fn new(store: IdeaStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Builds the context from the environment.
    ///
    /// `USE_MEMORY_STORE` selects the ephemeral store, seeded with demo
    /// ideas. Otherwise a Postgres pool is opened from the `DB_*`
    /// variables and the schema migration is applied.
    pub async fn from_env() -> Result<Self, DbErr> {
        if env::var("USE_MEMORY_STORE").is_ok() {
            tracing::info!("Using ephemeral in-memory idea store (demo ideas loaded)");
            return Ok(Self::new(IdeaStore::Memory(
                MemoryIdeaStore::with_demo_ideas(),
            )));
        }

        let config = StoreConfig::from_env();
        let connection = db::create_connection(&config.connection_url()).await?;
        db::run_migrations(&connection).await?;
        tracing::info!(
            "Using Postgres idea store at {}:{}/{}",
            config.host,
            config.port,
            config.database
        );

        Ok(Self::new(IdeaStore::Postgres(IdeaRepository::new(
            connection,
        ))))
    }
}
