use async_trait::async_trait;

use crate::{RegistryError, Server, ServerDetail};

/**
 * Storage capability behind the registry.
 * Implementations must be safe for concurrent reads.
 */
#[async_trait]
pub trait RegistryService: Send + Sync {
    /**
     * List at most `limit` servers, starting right after `cursor`, or from the beginning if `cursor` is `None`.
     * Returns the page and the cursor of the next page, `None` means there is no more page.
     */
    async fn list(
        &self,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<(Vec<Server>, Option<String>), RegistryError>;

    /**
     * Get full detail of one server by its id
     */
    async fn get_by_id(&self, id: &str) -> Result<ServerDetail, RegistryError>;

    /**
     * Add a new server into the registry
     */
    async fn publish(&self, detail: ServerDetail) -> Result<(), RegistryError>;
}
