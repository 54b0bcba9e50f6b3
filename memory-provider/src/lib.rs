mod db_registry;

use async_trait::async_trait;
use log::debug;
use registry_provider::{RegistryError, RegistryService, Server, ServerDetail};
use tokio::sync::RwLock;

use crate::db_registry::ServerStore;

/**
 * In-process registry, content lives as long as the process
 */
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    store: RwLock<ServerStore>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /**
     * Build a registry from existing records, records with duplicated id are rejected
     */
    pub fn from_details(
        details: impl IntoIterator<Item = ServerDetail>,
    ) -> Result<Self, RegistryError> {
        let mut store = ServerStore::default();
        for detail in details {
            store.insert(detail)?;
        }
        Ok(Self {
            store: RwLock::new(store),
        })
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.servers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RegistryService for MemoryRegistry {
    async fn list(
        &self,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<(Vec<Server>, Option<String>), RegistryError> {
        debug!("Listing servers, cursor: {:?}, limit: {}", cursor, limit);
        self.store.read().await.page(cursor, limit)
    }

    async fn get_by_id(&self, id: &str) -> Result<ServerDetail, RegistryError> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    async fn publish(&self, detail: ServerDetail) -> Result<(), RegistryError> {
        self.store.write().await.insert(detail).map(|_| ())
    }
}
