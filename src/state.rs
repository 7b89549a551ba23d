use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::{
    config::{Config, StoreBackend},
    errors::Result,
    session::{Session, SharedSession, refresh},
    store::{RecordStore, memory::MemoryStore, surreal::SurrealStore, tables::Tables},
};

#[derive(Clone)]
pub struct AppState {
    pub tables: Tables,
    pub session: SharedSession,
}

impl AppState {
    pub async fn init(config: &Config) -> Result<Self> {
        let store: Arc<dyn RecordStore> = match config.store {
            StoreBackend::Surreal => Arc::new(SurrealStore::connect(&config.surreal).await?),
            StoreBackend::Memory => {
                info!("Using in-memory record store");
                match &config.seed_file {
                    Some(path) => Arc::new(MemoryStore::from_seed_file(path)?),
                    None => Arc::new(MemoryStore::new()),
                }
            }
        };
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            tables: Tables::new(store),
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    pub async fn refresh(&self) {
        refresh(&self.session, &self.tables).await;
    }
}
